use super::intent::Intent;
use super::state::State;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Effects such as starting a capability or answering a caller stay with
/// the owner of the state. A reducer only decides the next state.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
