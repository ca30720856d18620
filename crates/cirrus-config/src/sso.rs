//! Identity Center (SSO) configuration.
//!
//! The instance ARN and the directory group ids cannot be created through a
//! manifest; they are copied from the console and supplied here.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SsoConfig {
    /// Identity Center instance ARN
    /// (e.g., `arn:aws:sso:::instance/ssoins-...`).
    #[serde(default)]
    pub instance_arn: String,

    /// Directory id of the engineers group.
    #[serde(default)]
    pub engineers_group_id: String,

    /// Directory id of the administrators group.
    #[serde(default)]
    pub administrators_group_id: String,

    /// Directory id of the finance group.
    #[serde(default)]
    pub finance_group_id: String,
}

impl SsoConfig {
    /// Check if every field required for assignment wiring is present.
    pub fn is_configured(&self) -> bool {
        !self.instance_arn.is_empty()
            && !self.engineers_group_id.is_empty()
            && !self.administrators_group_id.is_empty()
            && !self.finance_group_id.is_empty()
    }

    /// Fail with [`ConfigError::NotConfigured`] unless fully configured.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "sso".to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SsoConfig::default();
        assert!(!config.is_configured());
        assert!(config.ensure_configured().is_err());
    }

    #[test]
    fn configured_when_all_fields_set() {
        let config = SsoConfig {
            instance_arn: "arn:aws:sso:::instance/ssoins-test".into(),
            engineers_group_id: "g-eng".into(),
            administrators_group_id: "g-adm".into(),
            finance_group_id: "g-fin".into(),
        };
        assert!(config.is_configured());
        assert!(config.ensure_configured().is_ok());
    }

    #[test]
    fn partial_fields_are_not_enough() {
        let config = SsoConfig {
            instance_arn: "arn:aws:sso:::instance/ssoins-test".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
