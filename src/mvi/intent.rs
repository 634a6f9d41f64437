//! Inputs accepted by a [`Reducer`](super::Reducer).

/// Marker trait for intents.
///
/// An intent is either a call from the shell or an event reported by the
/// platform. Both kinds travel through the same queue, so a reducer sees
/// them in arrival order.
pub trait Intent: Send + 'static {}
