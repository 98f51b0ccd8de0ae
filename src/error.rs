use crate::domain::intent::{ErrorDetail, IntentKind};
use thiserror::Error;

/// Failure to place a coordinator inside its host container.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttachError {
    #[error("no host container is available")]
    MissingHost,
    #[error("host rejected attachment: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to detach from host: {0}")]
pub struct DetachError(pub String);

/// Failure to retrieve the current state of an intent.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("intent api error: {}", .0.message.as_deref().unwrap_or("unknown"))]
    Api(ErrorDetail),
    #[error("no such {}: '{client_secret}'", .kind.label())]
    NotFound {
        kind: IntentKind,
        client_secret: String,
    },
}

impl FetchError {
    /// Error detail reported to the caller when fetching an intent failed.
    pub fn into_detail(self) -> ErrorDetail {
        match self {
            FetchError::Api(detail) => detail,
            FetchError::NotFound {
                kind,
                client_secret,
            } => ErrorDetail {
                code: Some("resource_missing".to_string()),
                error_type: Some("invalid_request_error".to_string()),
                ..ErrorDetail::from_message(format!(
                    "No such {}: '{}'",
                    kind.label(),
                    client_secret
                ))
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
