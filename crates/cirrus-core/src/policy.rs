//! IAM policy references and inline policy documents.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to an AWS-managed IAM policy by name.
///
/// Path-qualified names (`job-function/Billing`) are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ManagedPolicy {
    name: String,
}

impl ManagedPolicy {
    pub fn aws_managed(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full ARN in the shared `aws` policy namespace.
    #[must_use]
    pub fn arn(&self) -> String {
        format!("arn:aws:iam::aws:policy/{}", self.name)
    }
}

/// Statement effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Effect {
    Allow,
    Deny,
}

/// A single IAM policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Action")]
    pub actions: Vec<String>,
    #[serde(rename = "Resource")]
    pub resources: Vec<String>,
}

impl PolicyStatement {
    pub fn allow(
        actions: impl IntoIterator<Item = impl Into<String>>,
        resources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            effect: Effect::Allow,
            actions: actions.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }
}

/// An inline IAM policy document, serialized in the shape the provider
/// expects (`Version` + `Statement`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statements: Vec<PolicyStatement>,
}

impl PolicyDocument {
    #[must_use]
    pub fn new(statements: Vec<PolicyStatement>) -> Self {
        Self {
            version: "2012-10-17".to_owned(),
            statements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn managed_policy_arn_derivation() {
        assert_eq!(
            ManagedPolicy::aws_managed("ReadOnlyAccess").arn(),
            "arn:aws:iam::aws:policy/ReadOnlyAccess"
        );
        assert_eq!(
            ManagedPolicy::aws_managed("job-function/Billing").arn(),
            "arn:aws:iam::aws:policy/job-function/Billing"
        );
    }

    #[test]
    fn policy_document_serializes_to_provider_shape() {
        let document = PolicyDocument::new(vec![PolicyStatement::allow(
            ["lambda:InvokeFunction"],
            ["*"],
        )]);

        assert_eq!(
            serde_json::to_value(&document).unwrap(),
            json!({
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Action": ["lambda:InvokeFunction"],
                    "Resource": ["*"],
                }],
            })
        );
    }
}
