use crate::domain::request::AccountContext;
use crate::error::{BridgeError, Result};

/// Account settings shared by every launch of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub publishable_key: String,
    pub stripe_account_id: Option<String>,
}

impl BridgeConfig {
    /// Validates and builds a configuration.
    ///
    /// The publishable key must be a `pk_` key; an empty connected account id
    /// is treated as absent.
    pub fn new(
        publishable_key: impl Into<String>,
        stripe_account_id: Option<String>,
    ) -> Result<Self> {
        let publishable_key = publishable_key.into();
        if !publishable_key.starts_with("pk_") || publishable_key.len() <= "pk_".len() {
            return Err(BridgeError::ConfigError(
                "publishable key must start with 'pk_'".to_string(),
            ));
        }

        let stripe_account_id = stripe_account_id.filter(|id| !id.trim().is_empty());
        if let Some(id) = &stripe_account_id
            && !id.starts_with("acct_")
        {
            return Err(BridgeError::ConfigError(format!(
                "connected account id '{id}' must start with 'acct_'"
            )));
        }

        Ok(Self {
            publishable_key,
            stripe_account_id,
        })
    }

    pub fn account_context(&self) -> AccountContext {
        AccountContext {
            publishable_key: self.publishable_key.clone(),
            stripe_account_id: self.stripe_account_id.clone(),
        }
    }
}
