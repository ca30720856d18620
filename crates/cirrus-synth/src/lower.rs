//! Adapter functions lowering domain entities into resource declarations.
//!
//! Logical ids reuse entity names, matching the convention that an
//! organization tree has one resource per named entity. Parent and target
//! references that only resolve after the provider creates a resource are
//! lowered to `Fn::GetAtt` attribute references.

use cirrus_core::org::{Account, Organization, Parent};
use cirrus_core::policy::ManagedPolicy;
use cirrus_core::sso::{Assignment, PermissionSet, TargetId};

use crate::error::SynthError;
use crate::resource::{
    AccountProperties, AssignmentProperties, OrganizationProperties,
    OrganizationalUnitProperties, PermissionSetProperties, Ref, Resource, ResourceSpec, attr,
};
use crate::stack::Stack;

/// Logical id of the organization root resource.
pub const ORGANIZATION_LOGICAL_ID: &str = "Organization";

fn parent_ref(parent: &Parent) -> Ref {
    match parent {
        Parent::Root => Ref::get_att(ORGANIZATION_LOGICAL_ID, attr::ROOT_ID),
        Parent::Unit(name) => Ref::get_att(name.clone(), attr::OU_ID),
    }
}

fn lower_account(account: &Account, stack: &mut Stack) {
    stack.add(Resource::new(
        account.name.clone(),
        ResourceSpec::Account(AccountProperties {
            account_name: account.name.clone(),
            email: account.email.clone(),
            parent_ids: vec![parent_ref(&account.parent)],
            tags: vec![],
        }),
    ));
}

/// Declare the organization root, then each unit, then each unit's accounts,
/// so every child follows its parent.
pub fn lower_organization(organization: &Organization, stack: &mut Stack) {
    stack.add(Resource::new(
        ORGANIZATION_LOGICAL_ID,
        ResourceSpec::Organization(OrganizationProperties {
            feature_set: organization.feature_set,
            tags: vec![],
        }),
    ));

    for account in organization.direct_accounts() {
        lower_account(account, stack);
    }

    for unit in organization.organizational_units() {
        stack.add(Resource::new(
            unit.name.clone(),
            ResourceSpec::OrganizationalUnit(OrganizationalUnitProperties {
                name: unit.name.clone(),
                parent_id: parent_ref(&unit.parent),
                tags: vec![],
            }),
        ));
        for account in unit.accounts() {
            lower_account(account, stack);
        }
    }
}

pub fn lower_permission_set(set: &PermissionSet, stack: &mut Stack) {
    stack.add(Resource::new(
        set.name.clone(),
        ResourceSpec::PermissionSet(PermissionSetProperties {
            name: set.name.clone(),
            instance_arn: set.instance_arn.clone(),
            managed_policies: set.managed_policies.iter().map(ManagedPolicy::arn).collect(),
            inline_policy: set.inline_policy.clone(),
            session_duration: set.session_duration,
            tags: vec![],
        }),
    ));
}

/// Declare one assignment. Derived targets are resolved against
/// `organization`; a missing account is a wiring bug surfaced here because
/// the reference cannot be expressed in the manifest.
pub fn lower_assignment(
    assignment: &Assignment,
    organization: Option<&Organization>,
    stack: &mut Stack,
) -> Result<(), SynthError> {
    let target_id = match &assignment.target.id {
        TargetId::External(id) => Ref::value(id.clone()),
        TargetId::DerivedFrom(name) => {
            let account = organization
                .and_then(|organization| organization.account(name))
                .ok_or_else(|| SynthError::UnknownAccount { name: name.clone() })?;
            Ref::get_att(account.name.clone(), attr::ACCOUNT_ID)
        }
    };

    stack.add(Resource::new(
        assignment.id.clone(),
        ResourceSpec::Assignment(AssignmentProperties {
            instance_arn: assignment.instance_arn.clone(),
            permission_set_arn: Ref::get_att(
                assignment.permission_set.clone(),
                attr::PERMISSION_SET_ARN,
            ),
            principal_id: assignment.principal.id.clone(),
            principal_type: assignment.principal.kind,
            target_id,
            target_type: assignment.target.kind,
        }),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::enums::{FeatureSet, SessionDuration};
    use cirrus_core::sso::{Principal, SsoInstance, Target};
    use pretty_assertions::assert_eq;

    fn estate() -> Organization {
        let mut organization = Organization::new(FeatureSet::All);
        organization
            .add_organizational_unit("HigherEnv")
            .add_account("Production", "admin+prod@example.com");
        let lower = organization.add_organizational_unit("LowerEnv");
        lower.add_account("Sandbox", "admin+sandbox@example.com");
        lower.add_account("Staging", "admin+staging@example.com");
        organization
    }

    #[test]
    fn children_follow_parents() {
        let mut stack = Stack::new("OrgsSso");
        lower_organization(&estate(), &mut stack);

        let ids: Vec<&str> = stack
            .resources()
            .iter()
            .map(|r| r.logical_id.as_str())
            .collect();
        let position = |id: &str| ids.iter().position(|x| *x == id).unwrap();

        assert_eq!(ids.len(), 6);
        assert_eq!(position("Organization"), 0);
        assert!(position("HigherEnv") < position("Production"));
        assert!(position("LowerEnv") < position("Sandbox"));
        assert!(position("LowerEnv") < position("Staging"));
    }

    #[test]
    fn account_parent_lowered_as_attribute_reference() {
        let mut stack = Stack::new("OrgsSso");
        lower_organization(&estate(), &mut stack);

        let production = stack
            .resources()
            .iter()
            .find(|r| r.logical_id == "Production")
            .unwrap();
        match &production.spec {
            ResourceSpec::Account(properties) => {
                assert_eq!(
                    properties.parent_ids,
                    vec![Ref::get_att("HigherEnv", attr::OU_ID)]
                );
                assert_eq!(properties.email, "admin+prod@example.com");
            }
            other => panic!("unexpected spec: {other:?}"),
        }
    }

    #[test]
    fn managed_policies_lowered_to_arns() {
        let instance = SsoInstance::new("arn:aws:sso:::instance/ssoins-test");
        let set = PermissionSet::billing_access("Billing", &instance);

        let mut stack = Stack::new("OrgsSso");
        lower_permission_set(&set, &mut stack);

        match &stack.resources()[0].spec {
            ResourceSpec::PermissionSet(properties) => {
                assert_eq!(
                    properties.managed_policies,
                    vec!["arn:aws:iam::aws:policy/job-function/Billing"]
                );
                assert_eq!(properties.session_duration, SessionDuration::OneHour);
            }
            other => panic!("unexpected spec: {other:?}"),
        }
    }

    #[test]
    fn derived_target_without_matching_account_fails() {
        let instance = SsoInstance::new("arn:aws:sso:::instance/ssoins-test");
        let set = PermissionSet::administrator_access("Administrator", &instance);
        let organization = estate();
        let ghost = {
            let mut other = Organization::new(FeatureSet::All);
            Target::from_account(other.add_account("Ghost", "ghost@example.com"))
        };

        let assignments = set.create_assignment(&Principal::group("g-adm"), &[ghost]);
        let mut stack = Stack::new("OrgsSso");
        let result = lower_assignment(&assignments[0], Some(&organization), &mut stack);

        assert!(matches!(
            result,
            Err(SynthError::UnknownAccount { ref name }) if name == "Ghost"
        ));
    }

    #[test]
    fn derived_target_resolves_to_account_attribute() {
        let organization = estate();
        let instance = SsoInstance::new("arn:aws:sso:::instance/ssoins-test");
        let set = PermissionSet::power_user_access("PowerUser", &instance);
        let target = Target::from_account(organization.account("Sandbox").unwrap());

        let assignments = set.create_assignment(&Principal::group("g-eng"), &[target]);
        let mut stack = Stack::new("OrgsSso");
        lower_assignment(&assignments[0], Some(&organization), &mut stack).unwrap();

        match &stack.resources()[0].spec {
            ResourceSpec::Assignment(properties) => {
                assert_eq!(
                    properties.target_id,
                    Ref::get_att("Sandbox", attr::ACCOUNT_ID)
                );
                assert_eq!(
                    properties.permission_set_arn,
                    Ref::get_att("PowerUser", attr::PERMISSION_SET_ARN)
                );
            }
            other => panic!("unexpected spec: {other:?}"),
        }
    }
}
