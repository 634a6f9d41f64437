//! Native action bridge for voice capture.
//!
//! The shell calls `startVoiceInput` through a [`BridgeClient`]; the
//! platform reports capability results through [`NativeEvents`]. Both feed
//! one queue drained by [`BridgeServer`], which owns the [`ActionBridge`]
//! state machine.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Idle / Recording
//! - `intent.rs` - Calls and platform events
//! - `reducer.rs` - State transitions
//! - `action.rs` - Effects: starting the capability, delivering outcomes

mod action;
mod capability;
mod client;
mod error;
mod intent;
mod reducer;
mod server;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use action::ActionBridge;
pub use capability::{Capability, CapabilityResult, CapabilityUnavailable};
pub use client::{BridgeClient, NativeEvents};
pub use error::{BridgeError, BridgeOutcome};
pub use intent::{BridgeIntent, NativeEvent};
pub use reducer::BridgeReducer;
pub use server::BridgeServer;
pub use state::{BridgeRequest, BridgeState};
pub use types::{BridgeCommand, BridgeLayer, START_VOICE_INPUT, VOICE_INPUT_CHANNEL};
