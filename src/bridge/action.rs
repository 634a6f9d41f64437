use tokio::sync::oneshot;

use crate::config::VoiceConfig;
use crate::mvi::Reducer;

use super::capability::{Capability, CapabilityResult};
use super::error::{BridgeError, BridgeOutcome};
use super::intent::{BridgeIntent, NativeEvent};
use super::reducer::BridgeReducer;
use super::state::{BridgeRequest, BridgeState};

/// Single-in-flight broker between the shell and the speech capability.
///
/// Owns the bridge state and the responder of the live request. All
/// transitions go through [`ActionBridge::invoke`] and
/// [`ActionBridge::handle`], which must be called from one event queue.
pub struct ActionBridge<C> {
    capability: C,
    voice: VoiceConfig,
    state: BridgeState,
    pending: Option<oneshot::Sender<BridgeOutcome>>,
}

impl<C: Capability> ActionBridge<C> {
    pub fn new(capability: C, voice: VoiceConfig) -> Self {
        Self {
            capability,
            voice,
            state: BridgeState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// Starts the capability, or answers `AlreadyActive` right away when a
    /// request is live. The outcome is sent exactly once on `respond_to`.
    ///
    /// `prompt` falls back to the configured prompt.
    pub fn invoke(&mut self, prompt: Option<String>, respond_to: oneshot::Sender<BridgeOutcome>) {
        if let Some(live) = self.state.request() {
            tracing::warn!(live_request = %live.id, "Rejecting call, voice input already in progress");
            respond(respond_to, Err(BridgeError::AlreadyActive));
            return;
        }

        let prompt = prompt.unwrap_or_else(|| self.voice.prompt.clone());
        let request = BridgeRequest::new(prompt, self.voice.language.as_str());
        self.transition(BridgeIntent::Invoke {
            request: request.clone(),
        });
        self.pending = Some(respond_to);
        tracing::info!(request = %request.id, language = %request.language, "Voice input started");

        if let Err(unavailable) = self.capability.start(&request) {
            tracing::warn!(request = %request.id, reason = %unavailable.reason, "Capability failed to start");
            self.handle(NativeEvent::CapabilityUnavailable);
        }
    }

    /// Resolves the live request from a platform event.
    ///
    /// Events arriving with no live request are ignored.
    pub fn handle(&mut self, event: NativeEvent) {
        let Some(request) = self.state.request().cloned() else {
            tracing::debug!(?event, "Ignoring capability event with no live request");
            return;
        };

        let outcome = match &event {
            NativeEvent::CapabilityUnavailable => Err(BridgeError::NoProviderAvailable),
            NativeEvent::Completed(result) => completion_outcome(result),
        };

        self.transition(event.into());
        match &outcome {
            Ok(_) => tracing::info!(request = %request.id, "Voice input completed"),
            Err(err) => tracing::info!(request = %request.id, code = err.code(), "Voice input ended"),
        }

        if let Some(respond_to) = self.pending.take() {
            respond(respond_to, outcome);
        }
    }

    fn transition(&mut self, intent: BridgeIntent) {
        let previous = std::mem::take(&mut self.state);
        self.state = BridgeReducer::reduce(previous, intent);
    }
}

fn completion_outcome(result: &CapabilityResult) -> BridgeOutcome {
    if result.success {
        Ok(result.utterances.first().cloned().unwrap_or_default())
    } else {
        Err(BridgeError::UserCancelled)
    }
}

fn respond(respond_to: oneshot::Sender<BridgeOutcome>, outcome: BridgeOutcome) {
    if respond_to.send(outcome).is_err() {
        tracing::trace!("Bridge: outcome dropped (caller gone)");
    }
}
