use thiserror::Error;

use super::state::BridgeRequest;

/// The platform reported that no speech provider can be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Capability unavailable: {reason}")]
pub struct CapabilityUnavailable {
    pub reason: String,
}

/// What the speech capability returned when it finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CapabilityResult {
    /// The capability produced a result (not cancelled, not failed).
    pub success: bool,
    /// Candidate transcriptions, best first.
    pub utterances: Vec<String>,
}

impl CapabilityResult {
    pub fn success(utterances: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            success: true,
            utterances: utterances.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }
}

/// Platform speech capability.
///
/// `start` only launches the capability; completion arrives later as a
/// separate event. An immediate `Err` means nothing was launched.
pub trait Capability: Send {
    fn start(&mut self, request: &BridgeRequest) -> Result<(), CapabilityUnavailable>;
}
