use tokio::sync::{mpsc, oneshot};

use super::action::ActionBridge;
use super::capability::Capability;
use super::error::{BridgeError, BridgeOutcome};
use super::types::{BridgeCommand, START_VOICE_INPUT};

/// Event loop that owns the [`ActionBridge`].
///
/// Commands from the shell and the platform share one queue, so every
/// transition happens in arrival order on a single task.
pub struct BridgeServer {
    receiver: mpsc::Receiver<BridgeCommand>,
}

impl BridgeServer {
    pub fn new(receiver: mpsc::Receiver<BridgeCommand>) -> Self {
        Self { receiver }
    }

    /// Runs until every client and event handle is dropped.
    pub async fn run<C: Capability>(mut self, mut bridge: ActionBridge<C>) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                BridgeCommand::Call {
                    method,
                    prompt,
                    respond_to,
                } => {
                    if method == START_VOICE_INPUT {
                        bridge.invoke(prompt, respond_to);
                    } else {
                        tracing::debug!(method = %method, "Bridge: unknown method");
                        reject(respond_to, BridgeError::NotImplemented { method });
                    }
                }
                BridgeCommand::Native(event) => bridge.handle(event),
            }
        }
        tracing::debug!("Bridge: all handles dropped, stopping");
    }
}

fn reject(respond_to: oneshot::Sender<BridgeOutcome>, error: BridgeError) {
    if respond_to.send(Err(error)).is_err() {
        tracing::trace!("Bridge: rejection dropped (caller gone)");
    }
}
