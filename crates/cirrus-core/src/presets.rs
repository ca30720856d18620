//! Preconfigured permission-set bundles.
//!
//! Four fixed presets cover the standing access tiers. Each produces the
//! same policy list and session duration regardless of call site; the
//! caller only chooses the set's name and identity instance.

use crate::enums::SessionDuration;
use crate::policy::ManagedPolicy;
use crate::sso::{PermissionSet, SsoInstance};

impl PermissionSet {
    /// Full administrative access, short sessions.
    pub fn administrator_access(name: impl Into<String>, instance: &SsoInstance) -> Self {
        Self::new(
            name,
            instance,
            vec![ManagedPolicy::aws_managed("AdministratorAccess")],
            SessionDuration::OneHour,
        )
    }

    /// Read-only access plus billing and log visibility. Extend with
    /// [`PermissionSet::with_inline_policy`] for narrow extras.
    pub fn read_only_access(name: impl Into<String>, instance: &SsoInstance) -> Self {
        Self::new(
            name,
            instance,
            vec![
                ManagedPolicy::aws_managed("ReadOnlyAccess"),
                ManagedPolicy::aws_managed("AWSBillingReadOnlyAccess"),
                ManagedPolicy::aws_managed("CloudWatchLogsReadOnlyAccess"),
            ],
            SessionDuration::EightHours,
        )
    }

    /// Everything except account and IAM management.
    pub fn power_user_access(name: impl Into<String>, instance: &SsoInstance) -> Self {
        Self::new(
            name,
            instance,
            vec![ManagedPolicy::aws_managed("PowerUserAccess")],
            SessionDuration::TwoHours,
        )
    }

    /// Billing job-function access for the finance team.
    pub fn billing_access(name: impl Into<String>, instance: &SsoInstance) -> Self {
        Self::new(
            name,
            instance,
            vec![ManagedPolicy::aws_managed("job-function/Billing")],
            SessionDuration::OneHour,
        )
    }
}
