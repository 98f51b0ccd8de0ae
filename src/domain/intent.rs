use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Which family of intent a confirmation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "paymentIntent")]
    Payment,
    #[serde(rename = "setupIntent")]
    Setup,
}

impl IntentKind {
    /// Key under which a resolved intent of this kind is reported.
    pub fn label(self) -> &'static str {
        match self {
            IntentKind::Payment => "paymentIntent",
            IntentKind::Setup => "setupIntent",
        }
    }

    /// Message reported when an interactive next action was abandoned and
    /// the intent carries no error of its own.
    pub fn default_cancel_message(self) -> &'static str {
        match self {
            IntentKind::Payment => "The payment has been canceled",
            IntentKind::Setup => "Setup has been canceled",
        }
    }
}

/// Lifecycle status of an intent as reported by the payments API.
///
/// Statuses this crate does not know about are kept verbatim in `Other` so
/// they can be surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IntentStatus {
    Succeeded,
    Processing,
    RequiresConfirmation,
    RequiresCapture,
    RequiresAction,
    RequiresPaymentMethod,
    Canceled,
    Other(String),
}

impl IntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IntentStatus::Succeeded => "succeeded",
            IntentStatus::Processing => "processing",
            IntentStatus::RequiresConfirmation => "requires_confirmation",
            IntentStatus::RequiresCapture => "requires_capture",
            IntentStatus::RequiresAction => "requires_action",
            IntentStatus::RequiresPaymentMethod => "requires_payment_method",
            IntentStatus::Canceled => "canceled",
            IntentStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for IntentStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "succeeded" => IntentStatus::Succeeded,
            "processing" => IntentStatus::Processing,
            "requires_confirmation" => IntentStatus::RequiresConfirmation,
            "requires_capture" => IntentStatus::RequiresCapture,
            "requires_action" => IntentStatus::RequiresAction,
            "requires_payment_method" => IntentStatus::RequiresPaymentMethod,
            "canceled" => IntentStatus::Canceled,
            other => IntentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for IntentStatus {
    fn from(raw: String) -> Self {
        IntentStatus::from(raw.as_str())
    }
}

impl From<IntentStatus> for String {
    fn from(status: IntentStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of step an intent is waiting on before it can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextActionType {
    RedirectToUrl,
    #[serde(rename = "use_stripe_sdk", alias = "use_sdk")]
    UseSdk,
    #[serde(rename = "alipay_handle_redirect", alias = "alipay_redirect")]
    AlipayRedirect,
    BlikAuthorize,
    #[serde(
        rename = "wechat_pay_redirect_to_android_app",
        alias = "wechat_pay_redirect"
    )]
    WeChatPayRedirect,
    #[serde(rename = "oxxo_display_details", alias = "display_oxxo_details")]
    DisplayOxxoDetails,
    VerifyWithMicrodeposits,
    /// A next action type newer than this crate.
    #[serde(other)]
    Unrecognized,
}

/// Returns true when the pending next action completes outside the current
/// session (a voucher paid later, a bank account verified asynchronously).
///
/// Intents waiting on such an action are reported as successful.
pub fn is_out_of_band_action(next_action: Option<NextActionType>) -> bool {
    match next_action {
        Some(NextActionType::DisplayOxxoDetails)
        | Some(NextActionType::VerifyWithMicrodeposits) => true,
        Some(NextActionType::RedirectToUrl)
        | Some(NextActionType::UseSdk)
        | Some(NextActionType::AlipayRedirect)
        | Some(NextActionType::BlikAuthorize)
        | Some(NextActionType::WeChatPayRedirect)
        | Some(NextActionType::Unrecognized)
        | None => false,
    }
}

/// Error details attached to an intent or raised by the payments SDK.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_error_code: Option<String>,
}

impl ErrorDetail {
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            localized_message: Some(message.clone()),
            message: Some(message),
            ..Self::default()
        }
    }
}

/// The state of an intent as fetched right after a confirmation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: IntentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action_type: Option<NextActionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<ErrorDetail>,
    /// Remaining intent fields, passed through to the caller untouched.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl IntentSnapshot {
    pub fn new(status: IntentStatus) -> Self {
        Self {
            id: None,
            status,
            next_action_type: None,
            last_error: None,
            details: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_next_action(mut self, next_action: NextActionType) -> Self {
        self.next_action_type = Some(next_action);
        self
    }

    pub fn with_last_error(mut self, error: ErrorDetail) -> Self {
        self.last_error = Some(error);
        self
    }
}
