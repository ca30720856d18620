//! Account id configuration.
//!
//! The management account always predates the deployment, so its id is
//! required. The environment account ids are only needed when the
//! organization tree is not managed by this stack (pre-existing accounts);
//! with a managed tree, those targets are derived from the declared
//! accounts instead.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccountsConfig {
    /// Management (payer) account id.
    #[serde(default)]
    pub management: String,

    /// Production account id (pre-existing accounts mode only).
    #[serde(default)]
    pub production: String,

    /// Staging account id (pre-existing accounts mode only).
    #[serde(default)]
    pub staging: String,

    /// Sandbox account id (pre-existing accounts mode only).
    #[serde(default)]
    pub sandbox: String,
}

impl AccountsConfig {
    /// Check that the management account id is present.
    pub fn is_configured(&self) -> bool {
        !self.management.is_empty()
    }

    /// Check that every environment account id is present, as required when
    /// the organization tree is not managed here.
    pub fn has_environment_ids(&self) -> bool {
        !self.production.is_empty() && !self.staging.is_empty() && !self.sandbox.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless the management id is
    /// set; with `require_environments`, the environment ids too.
    pub fn ensure_configured(&self, require_environments: bool) -> Result<(), ConfigError> {
        if self.is_configured() && (!require_environments || self.has_environment_ids()) {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "accounts".to_owned(),
            })
        }
    }
}
