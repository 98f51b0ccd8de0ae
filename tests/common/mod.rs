#![allow(dead_code)]

use intent_bridge::application::coordinator::LaunchCoordinator;
use intent_bridge::domain::confirmation::ConfirmationResult;
use intent_bridge::domain::intent::{IntentKind, IntentSnapshot};
use intent_bridge::domain::request::AccountContext;
use intent_bridge::infrastructure::in_memory::{
    FetchScript, HostBehavior, InMemoryHost, InMemoryIntentFetcher, ScriptedConfirmation,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Collaborator handles kept by a test while the coordinator owns clones.
pub struct Harness {
    pub host: InMemoryHost,
    pub confirmation: ScriptedConfirmation,
    pub fetcher: InMemoryIntentFetcher,
    pub account: AccountContext,
}

impl Harness {
    pub fn new(host: HostBehavior, confirmation: ConfirmationResult) -> Self {
        Self {
            host: InMemoryHost::new(host),
            confirmation: ScriptedConfirmation::new(confirmation),
            fetcher: InMemoryIntentFetcher::new(),
            account: AccountContext {
                publishable_key: "pk_test_harness".to_string(),
                stripe_account_id: None,
            },
        }
    }

    pub async fn with_intent(
        self,
        kind: IntentKind,
        client_secret: &str,
        snapshot: IntentSnapshot,
    ) -> Self {
        self.fetcher
            .insert(kind, client_secret, FetchScript::Snapshot(snapshot))
            .await;
        self
    }

    pub fn coordinator(&self) -> LaunchCoordinator {
        LaunchCoordinator::new(
            Box::new(self.host.clone()),
            Box::new(self.confirmation.clone()),
            Box::new(self.fetcher.clone()),
            self.account.clone(),
        )
    }
}

pub fn write_scenarios(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create scenario file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write scenario");
    }
    file
}
