use super::intent::ErrorDetail;
use serde::Deserialize;
use tokio::sync::oneshot;

/// What the SDK reports once a confirmation or next action finishes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConfirmationResult {
    Completed,
    #[serde(rename = "canceled")]
    UserCanceled,
    Failed(ErrorDetail),
}

/// Single-use handle through which a confirmation capability reports its
/// result. `complete` consumes the signal, so a result is delivered at most
/// once; dropping it undelivered is observed by the waiting coordinator.
#[derive(Debug)]
pub struct CompletionSignal {
    sender: oneshot::Sender<ConfirmationResult>,
}

pub type CompletionReceiver = oneshot::Receiver<ConfirmationResult>;

impl CompletionSignal {
    pub fn channel() -> (Self, CompletionReceiver) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    pub fn complete(self, result: ConfirmationResult) {
        if self.sender.send(result).is_err() {
            tracing::debug!("confirmation result delivered after the coordinator went away");
        }
    }
}
