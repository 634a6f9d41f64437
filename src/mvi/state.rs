//! State values driven by a [`Reducer`](super::Reducer).

/// Marker trait for machine state.
///
/// A state value owns everything that is live, such as the in-flight
/// request, so effects read it from the state and never from a side field.
/// `Default` is the resting state the machine returns to after every
/// outcome.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
