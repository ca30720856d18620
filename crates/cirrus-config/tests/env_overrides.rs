use figment::Jail;
use pretty_assertions::assert_eq;

use cirrus_config::CirrusConfig;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CIRRUS_SSO__INSTANCE_ARN", "arn:aws:sso:::instance/ssoins-jail");
        jail.set_env("CIRRUS_SSO__ENGINEERS_GROUP_ID", "g-eng");
        jail.set_env("CIRRUS_SSO__ADMINISTRATORS_GROUP_ID", "g-adm");
        jail.set_env("CIRRUS_SSO__FINANCE_GROUP_ID", "g-fin");
        jail.set_env("CIRRUS_ACCOUNTS__MANAGEMENT", "444444444444");
        jail.set_env("CIRRUS_ORGANIZATION__MANAGE", "false");
        jail.set_env("CIRRUS_STACK__NAME", "OrgsSso-Jail");

        let config = CirrusConfig::figment().extract::<CirrusConfig>()?;

        assert_eq!(config.sso.instance_arn, "arn:aws:sso:::instance/ssoins-jail");
        assert!(config.sso.is_configured());
        assert_eq!(config.accounts.management, "444444444444");
        assert!(!config.organization.manage);
        assert_eq!(config.stack.name, "OrgsSso-Jail");
        Ok(())
    });
}

#[test]
fn defaults_survive_partial_env() {
    Jail::expect_with(|jail| {
        jail.set_env("CIRRUS_STACK__OWNER", "CloudTeam");

        let config = CirrusConfig::figment().extract::<CirrusConfig>()?;

        assert_eq!(config.stack.owner, "CloudTeam");
        assert_eq!(config.stack.name, "OrgsSso");
        assert!(config.organization.manage);
        Ok(())
    });
}
