//! State of the action bridge.

use uuid::Uuid;

use crate::mvi::State;

/// One live capability call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeRequest {
    pub id: Uuid,
    pub prompt: String,
    pub language: String,
}

impl BridgeRequest {
    pub fn new(prompt: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            language: language.into(),
        }
    }
}

/// At most one request is live at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BridgeState {
    #[default]
    Idle,
    Recording { request: BridgeRequest },
}

impl State for BridgeState {}

impl BridgeState {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording { .. })
    }

    /// The live request, if any.
    pub fn request(&self) -> Option<&BridgeRequest> {
        match self {
            Self::Recording { request } => Some(request),
            Self::Idle => None,
        }
    }
}
