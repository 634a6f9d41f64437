//! Intents accepted by the action bridge.

use crate::mvi::Intent;

use super::capability::CapabilityResult;
use super::state::BridgeRequest;

/// Events produced by the platform after a capability was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEvent {
    /// No provider could be launched.
    CapabilityUnavailable,
    /// The capability finished (successfully or not).
    Completed(CapabilityResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeIntent {
    /// The shell asked for a new capability call.
    Invoke { request: BridgeRequest },
    CapabilityUnavailable,
    Completed(CapabilityResult),
}

impl Intent for BridgeIntent {}

impl From<NativeEvent> for BridgeIntent {
    fn from(event: NativeEvent) -> Self {
        match event {
            NativeEvent::CapabilityUnavailable => BridgeIntent::CapabilityUnavailable,
            NativeEvent::Completed(result) => BridgeIntent::Completed(result),
        }
    }
}
