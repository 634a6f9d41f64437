use tokio::sync::{mpsc, oneshot};

use super::capability::CapabilityResult;
use super::error::{BridgeError, BridgeOutcome};
use super::intent::NativeEvent;
use super::types::{BridgeCommand, START_VOICE_INPUT};

/// Shell-side handle for calling into the bridge.
#[derive(Clone)]
pub struct BridgeClient {
    sender: mpsc::Sender<BridgeCommand>,
}

impl BridgeClient {
    pub fn new(sender: mpsc::Sender<BridgeCommand>) -> Self {
        Self { sender }
    }

    /// Captures one utterance. Resolves once the capability finishes.
    ///
    /// No timeout is applied; a hung capability keeps the call pending.
    pub async fn start_voice_input(&self, prompt: Option<String>) -> BridgeOutcome {
        self.call(START_VOICE_INPUT, prompt).await
    }

    /// Invokes a bridge method by name.
    pub async fn call(&self, method: &str, prompt: Option<String>) -> BridgeOutcome {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(BridgeCommand::Call {
                method: method.to_string(),
                prompt,
                respond_to,
            })
            .await
            .map_err(|_| BridgeError::Disconnected)?;

        receiver.await.map_err(|_| BridgeError::Disconnected)?
    }
}

/// Platform-side handle for reporting capability events.
#[derive(Clone)]
pub struct NativeEvents {
    sender: mpsc::Sender<BridgeCommand>,
}

impl NativeEvents {
    pub fn new(sender: mpsc::Sender<BridgeCommand>) -> Self {
        Self { sender }
    }

    pub async fn capability_unavailable(&self) -> Result<(), BridgeError> {
        self.send(NativeEvent::CapabilityUnavailable).await
    }

    pub async fn completed(&self, result: CapabilityResult) -> Result<(), BridgeError> {
        self.send(NativeEvent::Completed(result)).await
    }

    async fn send(&self, event: NativeEvent) -> Result<(), BridgeError> {
        self.sender
            .send(BridgeCommand::Native(event))
            .await
            .map_err(|_| BridgeError::Disconnected)
    }
}
