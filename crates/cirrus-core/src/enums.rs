//! Closed wire-string enums for the organization and identity-access model.
//!
//! Every enum serializes to the exact string the provisioning provider
//! expects and exposes `as_str()` plus `Display` for logging and manifest
//! assembly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FeatureSet
// ---------------------------------------------------------------------------

/// Feature set enabled on the organization root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureSet {
    All,
    ConsolidatedBilling,
}

impl FeatureSet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::ConsolidatedBilling => "CONSOLIDATED_BILLING",
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SessionDuration
// ---------------------------------------------------------------------------

/// Maximum session length for a permission set, as an ISO-8601 duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SessionDuration {
    #[serde(rename = "PT1H")]
    OneHour,
    #[serde(rename = "PT2H")]
    TwoHours,
    #[serde(rename = "PT4H")]
    FourHours,
    #[serde(rename = "PT8H")]
    EightHours,
    #[serde(rename = "PT16H")]
    SixteenHours,
    #[serde(rename = "PT24H")]
    TwentyFourHours,
}

impl SessionDuration {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "PT1H",
            Self::TwoHours => "PT2H",
            Self::FourHours => "PT4H",
            Self::EightHours => "PT8H",
            Self::SixteenHours => "PT16H",
            Self::TwentyFourHours => "PT24H",
        }
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PrincipalType
// ---------------------------------------------------------------------------

/// Kind of identity-directory actor an assignment grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    User,
    Group,
}

impl PrincipalType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Group => "GROUP",
        }
    }
}

impl fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TargetType
// ---------------------------------------------------------------------------

/// Scope an assignment applies to. Accounts are the only supported target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    AwsAccount,
}

impl TargetType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwsAccount => "AWS_ACCOUNT",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_match_provider_values() {
        assert_eq!(FeatureSet::All.as_str(), "ALL");
        assert_eq!(FeatureSet::ConsolidatedBilling.as_str(), "CONSOLIDATED_BILLING");
        assert_eq!(SessionDuration::OneHour.as_str(), "PT1H");
        assert_eq!(SessionDuration::TwentyFourHours.as_str(), "PT24H");
        assert_eq!(PrincipalType::Group.as_str(), "GROUP");
        assert_eq!(TargetType::AwsAccount.as_str(), "AWS_ACCOUNT");
    }

    #[test]
    fn serde_uses_wire_strings() {
        assert_eq!(
            serde_json::to_string(&SessionDuration::EightHours).unwrap(),
            "\"PT8H\""
        );
        assert_eq!(serde_json::to_string(&FeatureSet::All).unwrap(), "\"ALL\"");
        assert_eq!(
            serde_json::to_string(&TargetType::AwsAccount).unwrap(),
            "\"AWS_ACCOUNT\""
        );
    }
}
