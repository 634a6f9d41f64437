use tokio::sync::{mpsc, oneshot};

use super::client::{BridgeClient, NativeEvents};
use super::error::BridgeOutcome;
use super::intent::NativeEvent;
use super::server::BridgeServer;

/// Channel name the shell uses for voice input calls.
pub const VOICE_INPUT_CHANNEL: &str = "hisabi/voice_input";

/// Method that starts speech capture.
pub const START_VOICE_INPUT: &str = "startVoiceInput";

const BRIDGE_BUFFER: usize = 16;

/// Everything the bridge event loop processes, in arrival order.
pub enum BridgeCommand {
    /// A method call from the shell.
    Call {
        method: String,
        prompt: Option<String>,
        respond_to: oneshot::Sender<BridgeOutcome>,
    },
    /// A platform event for the live request.
    Native(NativeEvent),
}

pub struct BridgeLayer;

impl BridgeLayer {
    /// Shell handle, platform handle, and the loop that owns the bridge.
    pub fn new() -> (BridgeClient, NativeEvents, BridgeServer) {
        let (sender, receiver) = mpsc::channel(BRIDGE_BUFFER);
        (
            BridgeClient::new(sender.clone()),
            NativeEvents::new(sender),
            BridgeServer::new(receiver),
        )
    }
}
