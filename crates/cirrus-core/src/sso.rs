//! Identity-access model: instances, principals, targets, permission sets,
//! and assignments.
//!
//! Everything here is a passive value; [`PermissionSet::create_assignment`]
//! is the only builder, fanning one principal out over a list of targets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{PrincipalType, SessionDuration, TargetType};
use crate::org::Account;
use crate::policy::{ManagedPolicy, PolicyDocument};

/// The identity-directory instance every permission set and assignment
/// belongs to. The ARN is supplied as configuration; instances cannot be
/// created through a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SsoInstance {
    pub instance_arn: String,
}

impl SsoInstance {
    pub fn new(instance_arn: impl Into<String>) -> Self {
        Self {
            instance_arn: instance_arn.into(),
        }
    }
}

/// An identity-directory actor referenced by opaque id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Principal {
    pub kind: PrincipalType,
    pub id: String,
}

impl Principal {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: PrincipalType::User,
            id: id.into(),
        }
    }

    pub fn group(id: impl Into<String>) -> Self {
        Self {
            kind: PrincipalType::Group,
            id: id.into(),
        }
    }
}

/// How a target account id is obtained at synthesis time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetId {
    /// A literal account id supplied as configuration.
    External(String),
    /// Derived from the named [`Account`] entity in the organization tree,
    /// resolved by the provider once the account exists.
    DerivedFrom(String),
}

/// The scope an assignment applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Target {
    pub kind: TargetType,
    pub id: TargetId,
}

impl Target {
    /// Target an account by its literal id.
    pub fn account(id: impl Into<String>) -> Self {
        Self {
            kind: TargetType::AwsAccount,
            id: TargetId::External(id.into()),
        }
    }

    /// Target an account declared in the organization tree.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            kind: TargetType::AwsAccount,
            id: TargetId::DerivedFrom(account.name.clone()),
        }
    }
}

/// A named, reusable bundle of access policies and a session duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionSet {
    pub name: String,
    pub instance_arn: String,
    pub managed_policies: Vec<ManagedPolicy>,
    pub inline_policy: Option<PolicyDocument>,
    pub session_duration: SessionDuration,
}

impl PermissionSet {
    pub fn new(
        name: impl Into<String>,
        instance: &SsoInstance,
        managed_policies: Vec<ManagedPolicy>,
        session_duration: SessionDuration,
    ) -> Self {
        Self {
            name: name.into(),
            instance_arn: instance.instance_arn.clone(),
            managed_policies,
            inline_policy: None,
            session_duration,
        }
    }

    #[must_use]
    pub fn with_inline_policy(mut self, document: PolicyDocument) -> Self {
        self.inline_policy = Some(document);
        self
    }

    /// Bind `principal` to this permission set on every target, one
    /// [`Assignment`] per target in input order. Each assignment's id is
    /// derived from its position so ids stay unique within the set.
    #[must_use]
    pub fn create_assignment(&self, principal: &Principal, targets: &[Target]) -> Vec<Assignment> {
        targets
            .iter()
            .enumerate()
            .map(|(index, target)| Assignment {
                id: format!("{}Target{index}Assignment", self.name),
                instance_arn: self.instance_arn.clone(),
                permission_set: self.name.clone(),
                principal: principal.clone(),
                target: target.clone(),
            })
            .collect()
    }
}

/// A binding of one principal to one permission set on one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Assignment {
    /// Logical id, unique within the deployment.
    pub id: String,
    pub instance_arn: String,
    /// Name of the permission set this assignment binds.
    pub permission_set: String,
    pub principal: Principal,
    pub target: Target,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn instance() -> SsoInstance {
        SsoInstance::new("arn:aws:sso:::instance/ssoins-test")
    }

    #[test]
    fn one_assignment_per_target_in_input_order() {
        let set = PermissionSet::new(
            "ReadOnly",
            &instance(),
            vec![ManagedPolicy::aws_managed("ReadOnlyAccess")],
            SessionDuration::EightHours,
        );
        let engineers = Principal::group("g-engineers");
        let targets = [
            Target::account("111111111111"),
            Target::account("222222222222"),
            Target::account("333333333333"),
        ];

        let assignments = set.create_assignment(&engineers, &targets);

        assert_eq!(assignments.len(), 3);
        for (index, assignment) in assignments.iter().enumerate() {
            assert_eq!(assignment.permission_set, "ReadOnly");
            assert_eq!(assignment.principal, engineers);
            assert_eq!(assignment.target, targets[index]);
            assert_eq!(assignment.id, format!("ReadOnlyTarget{index}Assignment"));
        }
    }

    #[test]
    fn empty_target_list_produces_no_assignments() {
        let set = PermissionSet::new(
            "Billing",
            &instance(),
            vec![ManagedPolicy::aws_managed("job-function/Billing")],
            SessionDuration::OneHour,
        );
        assert!(set.create_assignment(&Principal::group("g-finance"), &[]).is_empty());
    }

    #[test]
    fn derived_target_carries_account_name() {
        use crate::enums::FeatureSet;
        use crate::org::Organization;

        let mut org = Organization::new(FeatureSet::All);
        let account = org.add_account("Production", "admin+prod@example.com");
        let target = Target::from_account(account);

        assert_eq!(target.kind, TargetType::AwsAccount);
        assert_eq!(target.id, TargetId::DerivedFrom("Production".into()));
    }
}
