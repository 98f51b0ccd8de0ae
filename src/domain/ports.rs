use super::confirmation::CompletionSignal;
use super::intent::{IntentKind, IntentSnapshot};
use super::request::{AccountContext, ConfirmParams};
use crate::error::{AttachError, DetachError, FetchError};
use async_trait::async_trait;

/// The UI container a coordinator runs inside while the SDK is in control.
#[async_trait]
pub trait HostContainer: Send + Sync {
    async fn attach(&self) -> Result<(), AttachError>;
    /// Must be a no-op when nothing is attached.
    async fn detach(&self) -> Result<(), DetachError>;
}

/// The SDK's payment launcher. Each call must eventually deliver exactly one
/// result through `signal`.
#[async_trait]
pub trait ConfirmationCapability: Send + Sync {
    async fn confirm(
        &self,
        account: &AccountContext,
        kind: IntentKind,
        client_secret: &str,
        params: &ConfirmParams,
        signal: CompletionSignal,
    );

    async fn handle_pending_action(
        &self,
        account: &AccountContext,
        client_secret: &str,
        signal: CompletionSignal,
    );
}

/// Retrieves the current state of an intent from the payments API.
#[async_trait]
pub trait IntentFetcher: Send + Sync {
    async fn fetch_payment_intent(
        &self,
        account: &AccountContext,
        client_secret: &str,
    ) -> Result<IntentSnapshot, FetchError>;

    async fn fetch_setup_intent(
        &self,
        account: &AccountContext,
        client_secret: &str,
    ) -> Result<IntentSnapshot, FetchError>;
}

pub type HostContainerBox = Box<dyn HostContainer>;
pub type ConfirmationCapabilityBox = Box<dyn ConfirmationCapability>;
pub type IntentFetcherBox = Box<dyn IntentFetcher>;
