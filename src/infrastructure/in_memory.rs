use crate::domain::confirmation::{CompletionSignal, ConfirmationResult};
use crate::domain::intent::{ErrorDetail, IntentKind, IntentSnapshot};
use crate::domain::ports::{ConfirmationCapability, HostContainer, IntentFetcher};
use crate::domain::request::{AccountContext, ConfirmParams};
use crate::error::{AttachError, DetachError, FetchError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// How an [`InMemoryHost`] answers attach requests.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostBehavior {
    #[default]
    Available,
    Missing,
    Rejected(String),
}

#[derive(Debug, Default)]
struct HostState {
    attached: bool,
    attach_calls: usize,
    detach_calls: usize,
}

/// A host container that only tracks whether something is attached.
///
/// Clones share state, so a test can keep a handle while the coordinator
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    behavior: HostBehavior,
    fail_detach: bool,
    state: Arc<RwLock<HostState>>,
}

impl InMemoryHost {
    pub fn new(behavior: HostBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    /// Makes every detach report an error after releasing the attachment.
    pub fn with_failing_detach(mut self) -> Self {
        self.fail_detach = true;
        self
    }

    pub async fn is_attached(&self) -> bool {
        self.state.read().await.attached
    }

    pub async fn attach_calls(&self) -> usize {
        self.state.read().await.attach_calls
    }

    pub async fn detach_calls(&self) -> usize {
        self.state.read().await.detach_calls
    }
}

#[async_trait]
impl HostContainer for InMemoryHost {
    async fn attach(&self) -> Result<(), AttachError> {
        let mut state = self.state.write().await;
        state.attach_calls += 1;
        match &self.behavior {
            HostBehavior::Available => {
                state.attached = true;
                Ok(())
            }
            HostBehavior::Missing => Err(AttachError::MissingHost),
            HostBehavior::Rejected(message) => Err(AttachError::Rejected(message.clone())),
        }
    }

    async fn detach(&self) -> Result<(), DetachError> {
        let mut state = self.state.write().await;
        state.detach_calls += 1;
        let was_attached = std::mem::take(&mut state.attached);
        if self.fail_detach {
            return Err(DetachError("host container already destroyed".to_string()));
        }
        if !was_attached {
            tracing::debug!("detach requested with nothing attached");
        }
        Ok(())
    }
}

/// A call received by [`ScriptedConfirmation`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationCall {
    Confirm {
        account: AccountContext,
        kind: IntentKind,
        client_secret: String,
        params: ConfirmParams,
    },
    HandlePendingAction {
        account: AccountContext,
        client_secret: String,
    },
}

/// A confirmation capability that answers every call with a preset result,
/// delivered from a separate task like a real SDK callback.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmation {
    result: Option<ConfirmationResult>,
    calls: Arc<RwLock<Vec<ConfirmationCall>>>,
}

impl ScriptedConfirmation {
    pub fn new(result: ConfirmationResult) -> Self {
        Self {
            result: Some(result),
            calls: Arc::default(),
        }
    }

    /// Drops every completion signal without answering.
    pub fn silent() -> Self {
        Self {
            result: None,
            calls: Arc::default(),
        }
    }

    pub async fn calls(&self) -> Vec<ConfirmationCall> {
        self.calls.read().await.clone()
    }

    fn deliver(&self, signal: CompletionSignal) {
        match self.result.clone() {
            Some(result) => {
                tokio::spawn(async move { signal.complete(result) });
            }
            None => drop(signal),
        }
    }
}

#[async_trait]
impl ConfirmationCapability for ScriptedConfirmation {
    async fn confirm(
        &self,
        account: &AccountContext,
        kind: IntentKind,
        client_secret: &str,
        params: &ConfirmParams,
        signal: CompletionSignal,
    ) {
        self.calls.write().await.push(ConfirmationCall::Confirm {
            account: account.clone(),
            kind,
            client_secret: client_secret.to_string(),
            params: params.clone(),
        });
        self.deliver(signal);
    }

    async fn handle_pending_action(
        &self,
        account: &AccountContext,
        client_secret: &str,
        signal: CompletionSignal,
    ) {
        self.calls
            .write()
            .await
            .push(ConfirmationCall::HandlePendingAction {
                account: account.clone(),
                client_secret: client_secret.to_string(),
            });
        self.deliver(signal);
    }
}

/// What fetching a given intent returns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchScript {
    Snapshot(IntentSnapshot),
    Error(ErrorDetail),
}

/// A fetch received by [`InMemoryIntentFetcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub kind: IntentKind,
    pub client_secret: String,
    pub stripe_account_id: Option<String>,
}

/// Intent fetcher backed by a map of client secrets to scripted answers.
///
/// Unknown secrets fail the way the payments API does for missing resources.
#[derive(Debug, Default, Clone)]
pub struct InMemoryIntentFetcher {
    intents: Arc<RwLock<HashMap<(IntentKind, String), FetchScript>>>,
    calls: Arc<RwLock<Vec<FetchCall>>>,
}

impl InMemoryIntentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, kind: IntentKind, client_secret: &str, script: FetchScript) {
        let mut intents = self.intents.write().await;
        intents.insert((kind, client_secret.to_string()), script);
    }

    pub async fn calls(&self) -> Vec<FetchCall> {
        self.calls.read().await.clone()
    }

    async fn fetch(
        &self,
        kind: IntentKind,
        account: &AccountContext,
        client_secret: &str,
    ) -> Result<IntentSnapshot, FetchError> {
        self.calls.write().await.push(FetchCall {
            kind,
            client_secret: client_secret.to_string(),
            stripe_account_id: account.stripe_account_id.clone(),
        });

        let intents = self.intents.read().await;
        match intents.get(&(kind, client_secret.to_string())) {
            Some(FetchScript::Snapshot(snapshot)) => Ok(snapshot.clone()),
            Some(FetchScript::Error(detail)) => Err(FetchError::Api(detail.clone())),
            None => Err(FetchError::NotFound {
                kind,
                client_secret: client_secret.to_string(),
            }),
        }
    }
}

#[async_trait]
impl IntentFetcher for InMemoryIntentFetcher {
    async fn fetch_payment_intent(
        &self,
        account: &AccountContext,
        client_secret: &str,
    ) -> Result<IntentSnapshot, FetchError> {
        self.fetch(IntentKind::Payment, account, client_secret).await
    }

    async fn fetch_setup_intent(
        &self,
        account: &AccountContext,
        client_secret: &str,
    ) -> Result<IntentSnapshot, FetchError> {
        self.fetch(IntentKind::Setup, account, client_secret).await
    }
}
