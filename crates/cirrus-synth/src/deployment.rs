//! The composition root: wires the whole estate from configuration.
//!
//! One canonical composition, config-driven. With a managed organization
//! (the default) the tree is declared here and the environment assignment
//! targets derive from the declared accounts; without one, targets come from
//! the configured account ids. The management target always comes from
//! configuration because the management account predates any organization
//! resource.
//!
//! Assignment wiring is fixed either way:
//! ReadOnly -> engineers -> {production, staging, sandbox};
//! PowerUser -> engineers -> {sandbox};
//! Administrator -> administrators -> {production, staging, sandbox, management};
//! Billing -> finance -> {management}.

use tracing::info;

use cirrus_config::{CirrusConfig, OrganizationConfig};
use cirrus_core::enums::FeatureSet;
use cirrus_core::org::Organization;
use cirrus_core::policy::{PolicyDocument, PolicyStatement};
use cirrus_core::sso::{PermissionSet, Principal, SsoInstance, Target};

use crate::error::SynthError;
use crate::lower;
use crate::stack::Stack;
use crate::template::Template;

/// Assignment targets for the three environment accounts.
#[derive(Debug, Clone)]
struct EnvironmentTargets {
    production: Target,
    staging: Target,
    sandbox: Target,
}

/// Declare the organization tree and capture derived targets for the
/// accounts it creates.
fn build_organization(config: &OrganizationConfig) -> (Organization, EnvironmentTargets) {
    let mut organization = Organization::new(FeatureSet::All);

    let higher = organization.add_organizational_unit("HigherEnv");
    let production = Target::from_account(higher.add_account("Production", &config.production_email));

    let lower = organization.add_organizational_unit("LowerEnv");
    let sandbox = Target::from_account(lower.add_account("Sandbox", &config.sandbox_email));
    let staging = Target::from_account(lower.add_account("Staging", &config.staging_email));

    let targets = EnvironmentTargets {
        production,
        staging,
        sandbox,
    };
    (organization, targets)
}

/// Compose the full stack: organization tree (when managed), the four
/// standing permission sets, their assignments, and the three fixed tags.
pub fn compose(config: &CirrusConfig) -> Result<Stack, SynthError> {
    let mut stack = Stack::new(config.stack.name.clone());
    let instance = SsoInstance::new(config.sso.instance_arn.clone());

    let managed = config
        .organization
        .manage
        .then(|| build_organization(&config.organization));

    let (organization, targets) = match managed {
        Some((organization, targets)) => (Some(organization), targets),
        None => (
            None,
            EnvironmentTargets {
                production: Target::account(config.accounts.production.clone()),
                staging: Target::account(config.accounts.staging.clone()),
                sandbox: Target::account(config.accounts.sandbox.clone()),
            },
        ),
    };
    let management = Target::account(config.accounts.management.clone());

    if let Some(organization) = &organization {
        lower::lower_organization(organization, &mut stack);
    }

    let engineers = Principal::group(config.sso.engineers_group_id.clone());
    let administrators = Principal::group(config.sso.administrators_group_id.clone());
    let finance = Principal::group(config.sso.finance_group_id.clone());

    let read_only = PermissionSet::read_only_access("ReadOnly", &instance).with_inline_policy(
        PolicyDocument::new(vec![PolicyStatement::allow(["lambda:InvokeFunction"], ["*"])]),
    );
    wire(
        &read_only,
        &engineers,
        &[
            targets.production.clone(),
            targets.staging.clone(),
            targets.sandbox.clone(),
        ],
        organization.as_ref(),
        &mut stack,
    )?;

    let power_user = PermissionSet::power_user_access("PowerUser", &instance);
    wire(
        &power_user,
        &engineers,
        std::slice::from_ref(&targets.sandbox),
        organization.as_ref(),
        &mut stack,
    )?;

    let administrator = PermissionSet::administrator_access("Administrator", &instance);
    wire(
        &administrator,
        &administrators,
        &[
            targets.production,
            targets.staging,
            targets.sandbox,
            management.clone(),
        ],
        organization.as_ref(),
        &mut stack,
    )?;

    let billing = PermissionSet::billing_access("Billing", &instance);
    wire(&billing, &finance, &[management], organization.as_ref(), &mut stack)?;

    let tags = stack.standard_tags(&config.stack.owner, &config.stack.repo);
    stack.apply_tags(&tags);

    info!(
        stack = stack.name(),
        resources = stack.resources().len(),
        managed_organization = organization.is_some(),
        "composed stack"
    );
    Ok(stack)
}

/// Declare a permission set followed by its assignments.
fn wire(
    set: &PermissionSet,
    principal: &Principal,
    targets: &[Target],
    organization: Option<&Organization>,
    stack: &mut Stack,
) -> Result<(), SynthError> {
    lower::lower_permission_set(set, stack);
    for assignment in set.create_assignment(principal, targets) {
        lower::lower_assignment(&assignment, organization, stack)?;
    }
    Ok(())
}

/// Compose and finish into a manifest.
pub fn synthesize(config: &CirrusConfig) -> Result<Template, SynthError> {
    let stack = compose(config)?;
    let description = format!(
        "AWS Organizations and Identity Center resources for stack {}",
        stack.name()
    );
    Ok(stack.into_template(Some(description)))
}
