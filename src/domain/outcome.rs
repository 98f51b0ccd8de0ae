use super::intent::{ErrorDetail, IntentKind, IntentSnapshot};
use serde::Serialize;

pub const MISSING_HOST_MESSAGE: &str =
    "Activity doesn't exist yet. You can safely retry this method.";

/// The single terminal result of a confirmation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        kind: IntentKind,
        snapshot: IntentSnapshot,
    },
    Canceled {
        error: Option<ErrorDetail>,
    },
    /// `error` is absent when the intent failed without recording why.
    Failed {
        error: Option<ErrorDetail>,
    },
    MissingHost,
    Unknown {
        status_label: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Canceled,
    Failed,
    Unknown,
}

/// Boundary form of an [`Outcome`], as handed to the cross-platform layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeReport {
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_kind: Option<IntentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<IntentSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl OutcomeReport {
    fn error(status: ReportStatus, code: &'static str, error: Option<ErrorDetail>) -> Self {
        Self {
            status,
            intent_kind: None,
            intent: None,
            error_code: Some(code),
            message: error.as_ref().and_then(|e| e.message.clone()),
            error,
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn report(&self) -> OutcomeReport {
        match self {
            Outcome::Success { kind, snapshot } => OutcomeReport {
                status: ReportStatus::Success,
                intent_kind: Some(*kind),
                intent: Some(snapshot.clone()),
                error_code: None,
                message: None,
                error: None,
            },
            Outcome::Canceled { error } => {
                OutcomeReport::error(ReportStatus::Canceled, "Canceled", error.clone())
            }
            Outcome::Failed { error } => {
                OutcomeReport::error(ReportStatus::Failed, "Failed", error.clone())
            }
            Outcome::MissingHost => OutcomeReport::error(
                ReportStatus::Failed,
                "Failed",
                Some(ErrorDetail::from_message(MISSING_HOST_MESSAGE)),
            ),
            Outcome::Unknown { status_label } => OutcomeReport::error(
                ReportStatus::Unknown,
                "Unknown",
                Some(ErrorDetail::from_message(format!(
                    "unhandled error: {status_label}"
                ))),
            ),
        }
    }
}
