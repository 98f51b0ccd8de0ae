use crate::application::coordinator::LaunchCoordinator;
use crate::domain::outcome::Outcome;
use crate::domain::request::ConfirmationRequest;
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// Promise-style handle resolved exactly once with the serialized outcome.
pub struct OutcomePromise {
    sender: oneshot::Sender<Value>,
}

impl OutcomePromise {
    pub fn channel() -> (Self, oneshot::Receiver<Value>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    pub fn resolve(self, outcome: &Outcome) {
        let value = serde_json::to_value(outcome.report()).unwrap_or_else(|err| {
            json!({
                "status": "failed",
                "errorCode": "Failed",
                "message": format!("failed to serialize outcome: {err}"),
            })
        });
        if self.sender.send(value).is_err() {
            tracing::debug!("outcome promise resolved after the caller went away");
        }
    }
}

/// Spawns `coordinator` on the current runtime and returns the receiving end
/// of its promise.
pub fn launch_detached(
    coordinator: LaunchCoordinator,
    request: ConfirmationRequest,
) -> oneshot::Receiver<Value> {
    let (promise, receiver) = OutcomePromise::channel();
    tokio::spawn(async move {
        let outcome = coordinator.launch(request).await;
        promise.resolve(&outcome);
    });
    receiver
}
