use thiserror::Error;

/// Why a bridge call did not produce a transcription.
///
/// Each error ends only the request it belongs to; the bridge accepts the
/// next call right away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A request is already in flight.
    #[error("Voice input already in progress")]
    AlreadyActive,

    /// The platform has no speech capability to start.
    #[error("Speech recognition not available")]
    NoProviderAvailable,

    /// The capability ran but did not return a result.
    #[error("User cancelled voice input")]
    UserCancelled,

    /// The shell called a method the bridge does not expose.
    #[error("Method '{method}' not implemented")]
    NotImplemented { method: String },

    /// The bridge event loop is gone.
    #[error("Bridge channel disconnected")]
    Disconnected,
}

impl BridgeError {
    /// Stable code reported to the shell alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::AlreadyActive => "ALREADY_ACTIVE",
            BridgeError::NoProviderAvailable => "NO_SPEECH_APP",
            BridgeError::UserCancelled => "CANCELLED",
            BridgeError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            BridgeError::Disconnected => "DISCONNECTED",
        }
    }
}

/// Result delivered for every bridge call.
pub type BridgeOutcome = Result<String, BridgeError>;
