//! Organization tree configuration.

use serde::{Deserialize, Serialize};

/// Whether this stack manages the organization tree by default.
const fn default_manage() -> bool {
    true
}

fn default_production_email() -> String {
    "admin+prod@example.com".to_owned()
}

fn default_sandbox_email() -> String {
    "admin+sandbox@example.com".to_owned()
}

fn default_staging_email() -> String {
    "admin+staging@example.com".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationConfig {
    /// When true (default), the stack declares the organization, its units,
    /// and the environment accounts, and derives assignment targets from
    /// them. When false, the tree is assumed to exist already and targets
    /// come from `accounts.*` ids.
    #[serde(default = "default_manage")]
    pub manage: bool,

    /// Root email for the Production account.
    #[serde(default = "default_production_email")]
    pub production_email: String,

    /// Root email for the Sandbox account.
    #[serde(default = "default_sandbox_email")]
    pub sandbox_email: String,

    /// Root email for the Staging account.
    #[serde(default = "default_staging_email")]
    pub staging_email: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            manage: default_manage(),
            production_email: default_production_email(),
            sandbox_email: default_sandbox_email(),
            staging_email: default_staging_email(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_manage_the_tree() {
        let config = OrganizationConfig::default();
        assert!(config.manage);
        assert_eq!(config.production_email, "admin+prod@example.com");
    }
}
