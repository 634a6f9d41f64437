//! Reducer for the action bridge.

use crate::mvi::Reducer;

use super::intent::BridgeIntent;
use super::state::BridgeState;

/// Reducer for bridge state transitions.
pub struct BridgeReducer;

impl Reducer for BridgeReducer {
    type State = BridgeState;
    type Intent = BridgeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BridgeIntent::Invoke { request } => match state {
                BridgeState::Idle => BridgeState::Recording { request },
                // the live request wins; the caller rejects the new one
                recording @ BridgeState::Recording { .. } => recording,
            },

            BridgeIntent::CapabilityUnavailable | BridgeIntent::Completed(_) => BridgeState::Idle,
        }
    }
}
