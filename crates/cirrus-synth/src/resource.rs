//! Typed resource declarations.
//!
//! Each declaration serializes to the `{"Type": ..., "Properties": ...}`
//! shape the deployment engine consumes. Late-bound values that only exist
//! once the provider has created a resource (root ids, account ids,
//! permission-set ARNs) are expressed as [`Ref::GetAtt`] references.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use cirrus_core::enums::{FeatureSet, PrincipalType, SessionDuration, TargetType};
use cirrus_core::policy::PolicyDocument;

/// Attribute names resolvable through `Fn::GetAtt`.
pub mod attr {
    pub const ROOT_ID: &str = "RootId";
    pub const OU_ID: &str = "Id";
    pub const ACCOUNT_ID: &str = "AccountId";
    pub const PERMISSION_SET_ARN: &str = "PermissionSetArn";
}

/// A key/value tag stamped onto taggable resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A property value: either a literal string or an attribute reference the
/// engine resolves after the referenced resource exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ref {
    Value(String),
    GetAtt {
        logical_id: String,
        attribute: String,
    },
}

impl Ref {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }
}

impl Serialize for Ref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_str(value),
            Self::GetAtt {
                logical_id,
                attribute,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?;
                map.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationProperties {
    pub feature_set: FeatureSet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationalUnitProperties {
    pub name: String,
    pub parent_id: Ref,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountProperties {
    pub account_name: String,
    pub email: String,
    pub parent_ids: Vec<Ref>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionSetProperties {
    pub name: String,
    pub instance_arn: String,
    pub managed_policies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_policy: Option<PolicyDocument>,
    pub session_duration: SessionDuration,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Assignments are not taggable; the provider rejects tags on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignmentProperties {
    pub instance_arn: String,
    pub permission_set_arn: Ref,
    pub principal_id: String,
    pub principal_type: PrincipalType,
    pub target_id: Ref,
    pub target_type: TargetType,
}

/// Resource kind plus properties, adjacently tagged so it serializes
/// directly as `Type` + `Properties`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "Type", content = "Properties")]
pub enum ResourceSpec {
    #[serde(rename = "AWS::Organizations::Organization")]
    Organization(OrganizationProperties),
    #[serde(rename = "AWS::Organizations::OrganizationalUnit")]
    OrganizationalUnit(OrganizationalUnitProperties),
    #[serde(rename = "AWS::Organizations::Account")]
    Account(AccountProperties),
    #[serde(rename = "AWS::SSO::PermissionSet")]
    PermissionSet(PermissionSetProperties),
    #[serde(rename = "AWS::SSO::Assignment")]
    Assignment(AssignmentProperties),
}

/// A resource declaration registered under a logical id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub logical_id: String,
    pub spec: ResourceSpec,
}

impl Resource {
    pub fn new(logical_id: impl Into<String>, spec: ResourceSpec) -> Self {
        Self {
            logical_id: logical_id.into(),
            spec,
        }
    }

    /// Provider type name of this declaration.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match &self.spec {
            ResourceSpec::Organization(_) => "AWS::Organizations::Organization",
            ResourceSpec::OrganizationalUnit(_) => "AWS::Organizations::OrganizationalUnit",
            ResourceSpec::Account(_) => "AWS::Organizations::Account",
            ResourceSpec::PermissionSet(_) => "AWS::SSO::PermissionSet",
            ResourceSpec::Assignment(_) => "AWS::SSO::Assignment",
        }
    }

    /// Mutable tag list, or `None` for resource kinds that reject tags.
    pub fn tags_mut(&mut self) -> Option<&mut Vec<Tag>> {
        match &mut self.spec {
            ResourceSpec::Organization(properties) => Some(&mut properties.tags),
            ResourceSpec::OrganizationalUnit(properties) => Some(&mut properties.tags),
            ResourceSpec::Account(properties) => Some(&mut properties.tags),
            ResourceSpec::PermissionSet(properties) => Some(&mut properties.tags),
            ResourceSpec::Assignment(_) => None,
        }
    }
}
