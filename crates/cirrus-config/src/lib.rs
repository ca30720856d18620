//! # cirrus-config
//!
//! Configuration for Cirrus, assembled with figment from four layers.
//!
//! Highest priority wins:
//! 1. `CIRRUS_*` environment variables, with `__` separating nested
//!    sections (`CIRRUS_SSO__INSTANCE_ARN` -> `sso.instance_arn`,
//!    `CIRRUS_ACCOUNTS__MANAGEMENT` -> `accounts.management`)
//! 2. `.cirrus/config.toml` in the project directory
//! 3. `~/.config/cirrus/config.toml`
//! 4. Built-in defaults
//!
//! A deployment typically keeps group and account ids in the project file
//! and injects the instance ARN through the environment, but any split of
//! values across layers works.
//!
//! ```no_run
//! use cirrus_config::CirrusConfig;
//!
//! let config = CirrusConfig::load_with_dotenv().expect("config");
//! if !config.sso.is_configured() {
//!     eprintln!("identity-center settings are incomplete");
//! }
//! ```

mod accounts;
mod error;
mod organization;
mod sso;
mod stack;

pub use accounts::AccountsConfig;
pub use error::ConfigError;
pub use organization::OrganizationConfig;
pub use sso::SsoConfig;
pub use stack::StackConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CirrusConfig {
    #[serde(default)]
    pub stack: StackConfig,
    #[serde(default)]
    pub sso: SsoConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub organization: OrganizationConfig,
}

impl CirrusConfig {
    /// Read configuration from the TOML files and the process environment.
    ///
    /// Leaves `.env` files alone; [`Self::load_with_dotenv`] layers those on
    /// top for the CLI.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Like [`Self::load`], after feeding the nearest `.env` file into the
    /// process environment.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// The provider chain behind [`Self::load`], exposed so tests can stack
    /// extra providers on top of it.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // User-global file first, so the project file can shadow it.
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".cirrus/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Environment variables shadow everything else.
        figment.merge(Env::prefixed("CIRRUS_").split("__"))
    }

    /// Where the user-global config file lives.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cirrus").join("config.toml"))
    }

    /// Feed the nearest `.env` into the process environment.
    ///
    /// Starts at `CARGO_MANIFEST_DIR` when set (tests and `cargo run` land
    /// inside a member crate) and climbs toward the workspace root. A
    /// missing `.env` is not an error.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = CirrusConfig::default();
        assert!(!config.sso.is_configured());
        assert!(!config.accounts.is_configured());
        assert!(config.organization.manage);
        assert_eq!(config.stack.name, "OrgsSso");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = CirrusConfig::figment();
        let config: CirrusConfig = figment.extract().expect("should extract defaults");
        assert!(!config.sso.is_configured());
        assert_eq!(config.stack.owner, "Platform");
    }
}
