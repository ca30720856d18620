//! Stack naming and tagging configuration.

use serde::{Deserialize, Serialize};

/// Default stack name.
fn default_name() -> String {
    "OrgsSso".to_owned()
}

/// Default owner tag value.
fn default_owner() -> String {
    "Platform".to_owned()
}

/// Default repo tag value.
fn default_repo() -> String {
    "cirrus".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StackConfig {
    /// Logical stack name; also the value of the `stack` tag.
    #[serde(default = "default_name")]
    pub name: String,

    /// Value of the `owner` tag applied to every taggable resource.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Value of the `repo` tag applied to every taggable resource.
    #[serde(default = "default_repo")]
    pub repo: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            owner: default_owner(),
            repo: default_repo(),
        }
    }
}
