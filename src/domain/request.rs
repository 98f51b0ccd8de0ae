use super::intent::IntentKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account a launch runs under: the publishable key used to create the
/// SDK launcher and an optional connected account id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountContext {
    pub publishable_key: String,
    pub stripe_account_id: Option<String>,
}

/// Parameters forwarded to the SDK when confirming an intent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Payment-method specific data (billing details, mandate data, ...).
    #[serde(flatten)]
    pub payment_method_data: Map<String, Value>,
}

/// One user-initiated confirmation. Consumed exactly once by a coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ConfirmationRequest {
    ConfirmPayment {
        client_secret: String,
        #[serde(default)]
        params: ConfirmParams,
    },
    ConfirmSetup {
        client_secret: String,
        #[serde(default)]
        params: ConfirmParams,
    },
    HandleNextAction {
        client_secret: String,
    },
}

/// Loose, optional-field form of a request as it arrives from the host
/// layer. Exactly one of the three groups must be populated.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub payment_intent_client_secret: Option<String>,
    pub confirm_payment_params: Option<ConfirmParams>,
    pub setup_intent_client_secret: Option<String>,
    pub confirm_setup_params: Option<ConfirmParams>,
    pub handle_next_action_client_secret: Option<String>,
}

impl ConfirmationRequest {
    /// Builds a request from its loose parts.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one of payment (secret + params), setup
    /// (secret + params) or next action (secret) is provided. A malformed
    /// request is a bug in the caller, never a reportable outcome.
    pub fn from_parts(parts: RequestParts) -> Self {
        let RequestParts {
            payment_intent_client_secret,
            confirm_payment_params,
            setup_intent_client_secret,
            confirm_setup_params,
            handle_next_action_client_secret,
        } = parts;

        match (
            payment_intent_client_secret,
            confirm_payment_params,
            setup_intent_client_secret,
            confirm_setup_params,
            handle_next_action_client_secret,
        ) {
            (Some(client_secret), Some(params), None, None, None) => {
                ConfirmationRequest::ConfirmPayment {
                    client_secret,
                    params,
                }
            }
            (None, None, Some(client_secret), Some(params), None) => {
                ConfirmationRequest::ConfirmSetup {
                    client_secret,
                    params,
                }
            }
            (None, None, None, None, Some(client_secret)) => {
                ConfirmationRequest::HandleNextAction { client_secret }
            }
            _ => panic!(
                "Invalid parameters provided to the payment launcher: provide exactly one client \
                 secret, together with its confirm params when confirming a payment or setup"
            ),
        }
    }

    /// Kind of intent fetched once the confirmation completes. Next actions
    /// are only ever handled for payment intents.
    pub fn intent_kind(&self) -> IntentKind {
        match self {
            ConfirmationRequest::ConfirmPayment { .. } => IntentKind::Payment,
            ConfirmationRequest::ConfirmSetup { .. } => IntentKind::Setup,
            ConfirmationRequest::HandleNextAction { .. } => IntentKind::Payment,
        }
    }

    pub fn client_secret(&self) -> &str {
        match self {
            ConfirmationRequest::ConfirmPayment { client_secret, .. }
            | ConfirmationRequest::ConfirmSetup { client_secret, .. }
            | ConfirmationRequest::HandleNextAction { client_secret } => client_secret,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            ConfirmationRequest::ConfirmPayment { .. } => "confirm_payment",
            ConfirmationRequest::ConfirmSetup { .. } => "confirm_setup",
            ConfirmationRequest::HandleNextAction { .. } => "handle_next_action",
        }
    }
}
