use crate::domain::intent::{
    ErrorDetail, IntentKind, IntentSnapshot, IntentStatus, is_out_of_band_action,
};
use crate::domain::outcome::Outcome;
use crate::domain::ports::IntentFetcherBox;
use crate::domain::request::AccountContext;
use tracing::debug;

/// Fetches the latest state of an intent and classifies it into an [`Outcome`].
///
/// Payment and setup intents share one classification; the only per-kind
/// inputs are the fetch call and the default cancellation message.
pub struct IntentResolver {
    fetcher: IntentFetcherBox,
    account: AccountContext,
}

impl IntentResolver {
    pub fn new(fetcher: IntentFetcherBox, account: AccountContext) -> Self {
        Self { fetcher, account }
    }

    /// Fetches the intent once and classifies it. Fetch failures short-circuit
    /// into `Outcome::Failed`; nothing is retried here.
    pub async fn resolve(&self, kind: IntentKind, client_secret: &str) -> Outcome {
        let fetched = match kind {
            IntentKind::Payment => {
                self.fetcher
                    .fetch_payment_intent(&self.account, client_secret)
                    .await
            }
            IntentKind::Setup => {
                self.fetcher
                    .fetch_setup_intent(&self.account, client_secret)
                    .await
            }
        };

        match fetched {
            Ok(snapshot) => classify(kind, snapshot),
            Err(err) => {
                debug!(intent_kind = kind.label(), error = %err, "intent fetch failed");
                Outcome::Failed {
                    error: Some(err.into_detail()),
                }
            }
        }
    }
}

/// Maps a fetched intent onto the outcome reported to the caller.
pub fn classify(kind: IntentKind, snapshot: IntentSnapshot) -> Outcome {
    debug!(
        intent_kind = kind.label(),
        status = %snapshot.status,
        next_action = ?snapshot.next_action_type,
        "classifying intent"
    );

    match snapshot.status.clone() {
        IntentStatus::Succeeded
        | IntentStatus::Processing
        | IntentStatus::RequiresConfirmation
        | IntentStatus::RequiresCapture => Outcome::Success { kind, snapshot },
        IntentStatus::RequiresAction => {
            if is_out_of_band_action(snapshot.next_action_type) {
                Outcome::Success { kind, snapshot }
            } else {
                let error = snapshot
                    .last_error
                    .unwrap_or_else(|| ErrorDetail::from_message(kind.default_cancel_message()));
                Outcome::Canceled { error: Some(error) }
            }
        }
        IntentStatus::RequiresPaymentMethod => Outcome::Failed {
            error: snapshot.last_error,
        },
        IntentStatus::Canceled => Outcome::Canceled {
            error: snapshot.last_error,
        },
        IntentStatus::Other(raw) => Outcome::Unknown { status_label: raw },
    }
}
