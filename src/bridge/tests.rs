use super::*;
use crate::config::VoiceConfig;
use std::time::Duration;
use tokio::sync::mpsc;

/// Reports every started request so tests know when native work began.
struct NotifyingCapability {
    started: mpsc::UnboundedSender<BridgeRequest>,
    available: bool,
}

impl Capability for NotifyingCapability {
    fn start(&mut self, request: &BridgeRequest) -> Result<(), CapabilityUnavailable> {
        if !self.available {
            return Err(CapabilityUnavailable {
                reason: "no speech app".into(),
            });
        }
        let _ = self.started.send(request.clone());
        Ok(())
    }
}

fn spawn_bridge(
    available: bool,
) -> (
    BridgeClient,
    NativeEvents,
    mpsc::UnboundedReceiver<BridgeRequest>,
) {
    let (started_tx, started_rx) = mpsc::unbounded_channel();
    let capability = NotifyingCapability {
        started: started_tx,
        available,
    };
    let (client, native, server) = BridgeLayer::new();
    tokio::spawn(server.run(ActionBridge::new(capability, VoiceConfig::default())));
    (client, native, started_rx)
}

async fn next_started(started: &mut mpsc::UnboundedReceiver<BridgeRequest>) -> BridgeRequest {
    tokio::time::timeout(Duration::from_secs(1), started.recv())
        .await
        .expect("capability start timed out")
        .expect("capability channel closed")
}

#[tokio::test]
async fn voice_input_round_trip() {
    let (client, native, mut started) = spawn_bridge(true);

    let call = tokio::spawn({
        let client = client.clone();
        async move { client.start_voice_input(Some("Say an expense".into())).await }
    });

    let request = next_started(&mut started).await;
    assert_eq!(request.prompt, "Say an expense");

    native
        .completed(CapabilityResult::success(["12 for coffee"]))
        .await
        .expect("send completion");

    let outcome = call.await.expect("join");
    assert_eq!(outcome, Ok("12 for coffee".to_string()));
}

#[tokio::test]
async fn second_call_while_recording_is_already_active() {
    let (client, native, mut started) = spawn_bridge(true);

    let first = tokio::spawn({
        let client = client.clone();
        async move { client.start_voice_input(None).await }
    });
    next_started(&mut started).await;

    let second = client.start_voice_input(None).await;
    assert_eq!(second, Err(BridgeError::AlreadyActive));
    assert!(started.try_recv().is_err(), "no second native start");

    native
        .completed(CapabilityResult::cancelled())
        .await
        .expect("send completion");
    assert_eq!(first.await.expect("join"), Err(BridgeError::UserCancelled));
}

#[tokio::test]
async fn missing_provider_reports_no_provider() {
    let (client, _native, _started) = spawn_bridge(false);

    let outcome = client.start_voice_input(None).await;
    assert_eq!(outcome, Err(BridgeError::NoProviderAvailable));
    assert_eq!(outcome.unwrap_err().code(), "NO_SPEECH_APP");
}

#[tokio::test]
async fn unknown_method_is_not_implemented() {
    let (client, _native, mut started) = spawn_bridge(true);

    let outcome = client.call("stopVoiceInput", None).await;
    assert_eq!(
        outcome,
        Err(BridgeError::NotImplemented {
            method: "stopVoiceInput".into()
        })
    );
    assert!(started.try_recv().is_err());
}

#[tokio::test]
async fn stray_completion_is_ignored() {
    let (client, native, mut started) = spawn_bridge(true);

    native
        .completed(CapabilityResult::success(["stale"]))
        .await
        .expect("send stray");
    native
        .capability_unavailable()
        .await
        .expect("send stray");

    let call = tokio::spawn({
        let client = client.clone();
        async move { client.start_voice_input(None).await }
    });
    next_started(&mut started).await;
    native
        .completed(CapabilityResult::success(["fresh"]))
        .await
        .expect("send completion");

    assert_eq!(call.await.expect("join"), Ok("fresh".to_string()));
}

#[tokio::test]
async fn dropped_server_is_disconnected() {
    let (client, native, server) = BridgeLayer::new();
    drop(server);

    assert_eq!(
        client.start_voice_input(None).await,
        Err(BridgeError::Disconnected)
    );
    assert_eq!(
        native.capability_unavailable().await,
        Err(BridgeError::Disconnected)
    );
}
