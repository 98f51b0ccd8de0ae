use super::resolver::IntentResolver;
use crate::domain::confirmation::{CompletionSignal, ConfirmationResult};
use crate::domain::intent::{ErrorDetail, IntentKind};
use crate::domain::outcome::Outcome;
use crate::domain::ports::{ConfirmationCapabilityBox, HostContainerBox, IntentFetcherBox};
use crate::domain::request::{AccountContext, ConfirmationRequest};
use crate::error::AttachError;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

/// Drives a single confirmation from launch to its terminal [`Outcome`].
///
/// A coordinator is built fresh for every user action and consumed by
/// [`LaunchCoordinator::launch`]. It attaches to the host container, hands the
/// request to the SDK, waits for the completion signal and, when the SDK
/// reports completion, asks the [`IntentResolver`] to classify the intent.
/// The host is released exactly once on every path.
pub struct LaunchCoordinator {
    host: HostContainerBox,
    confirmation: ConfirmationCapabilityBox,
    resolver: IntentResolver,
    account: AccountContext,
    attach_attempted: AtomicBool,
    released: AtomicBool,
}

impl LaunchCoordinator {
    /// Creates a new `LaunchCoordinator`.
    ///
    /// # Arguments
    ///
    /// * `host` - The container the coordinator attaches to while running.
    /// * `confirmation` - The SDK launcher used to confirm or handle next actions.
    /// * `fetcher` - Retrieves intents once the SDK reports completion.
    /// * `account` - Publishable key and connected account for every call.
    pub fn new(
        host: HostContainerBox,
        confirmation: ConfirmationCapabilityBox,
        fetcher: IntentFetcherBox,
        account: AccountContext,
    ) -> Self {
        Self {
            host,
            confirmation,
            resolver: IntentResolver::new(fetcher, account.clone()),
            account,
            attach_attempted: AtomicBool::new(false),
            released: AtomicBool::new(false),
        }
    }

    /// Runs the request to completion and returns its outcome.
    ///
    /// Consuming `self` guarantees the outcome is produced once per coordinator.
    pub async fn launch(self, request: ConfirmationRequest) -> Outcome {
        let action = request.action();
        debug!(action, "launching confirmation");

        let outcome = self.run(&request).await;
        self.release().await;

        info!(action, outcome = outcome_label(&outcome), "confirmation finished");
        outcome
    }

    async fn run(&self, request: &ConfirmationRequest) -> Outcome {
        self.attach_attempted.store(true, Ordering::SeqCst);
        if let Err(err) = self.host.attach().await {
            warn!(error = %err, "could not attach payment launcher to host");
            return match err {
                AttachError::MissingHost => Outcome::MissingHost,
                AttachError::Rejected(message) => Outcome::Failed {
                    error: Some(ErrorDetail::from_message(message)),
                },
            };
        }

        let (signal, receiver) = CompletionSignal::channel();
        match request {
            ConfirmationRequest::ConfirmPayment {
                client_secret,
                params,
            } => {
                self.confirmation
                    .confirm(&self.account, IntentKind::Payment, client_secret, params, signal)
                    .await
            }
            ConfirmationRequest::ConfirmSetup {
                client_secret,
                params,
            } => {
                self.confirmation
                    .confirm(&self.account, IntentKind::Setup, client_secret, params, signal)
                    .await
            }
            ConfirmationRequest::HandleNextAction { client_secret } => {
                self.confirmation
                    .handle_pending_action(&self.account, client_secret, signal)
                    .await
            }
        }

        let result = match receiver.await {
            Ok(result) => result,
            Err(_) => {
                error!(
                    action = request.action(),
                    "confirmation capability dropped its completion signal"
                );
                return Outcome::Failed {
                    error: Some(ErrorDetail::from_message(
                        "Confirmation finished without reporting a result",
                    )),
                };
            }
        };

        match result {
            ConfirmationResult::Completed => {
                debug!(action = request.action(), "confirmation completed, fetching intent");
                self.resolver
                    .resolve(request.intent_kind(), request.client_secret())
                    .await
            }
            ConfirmationResult::UserCanceled => Outcome::Canceled { error: None },
            ConfirmationResult::Failed(detail) => Outcome::Failed {
                error: Some(detail),
            },
        }
    }

    /// Detaches from the host once an attach has been attempted. Only the
    /// first such call reaches the host; detach failures are logged and never
    /// affect the outcome.
    async fn release(&self) {
        if !self.attach_attempted.load(Ordering::SeqCst) {
            return;
        }
        if self.released.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Err(err) = self.host.detach().await {
            warn!(error = %err, "failed to release payment launcher");
        }
    }
}

fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Success { .. } => "success",
        Outcome::Canceled { .. } => "canceled",
        Outcome::Failed { .. } => "failed",
        Outcome::MissingHost => "missing_host",
        Outcome::Unknown { .. } => "unknown",
    }
}
