//! Environment-related types returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for an environment (e.g. "p5o8qhka").
pub type EnvironmentUri = String;

/// A linked AWS account/region workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub environment_uri: EnvironmentUri,

    /// Display name chosen at link time.
    pub label: String,

    pub owner: String,

    #[serde(rename = "AwsAccountId")]
    pub aws_account_id: String,

    pub region: String,

    /// IdP group administering the environment.
    #[serde(rename = "SamlGroupName")]
    pub saml_group_name: String,

    pub organization_uri: Option<String>,

    pub description: Option<String>,

    pub created: Option<NaiveDateTime>,

    /// CloudFormation stack backing the environment, when deployed.
    pub stack: Option<Stack>,
}

/// Deployment status of the backing CloudFormation stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub stack_uri: String,
    pub status: String,
}

/// A team (IdP group) invited onto an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentGroup {
    pub group_uri: String,

    pub environment_uri: EnvironmentUri,

    /// Group that issued the invitation.
    pub invited_by: Option<String>,

    #[serde(rename = "environmentIAMRoleArn")]
    pub environment_iam_role_arn: Option<String>,

    pub created: Option<NaiveDateTime>,
}

/// An IAM role grantable access to shared resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRole {
    pub consumption_role_uri: String,

    pub consumption_role_name: String,

    pub environment_uri: EnvironmentUri,

    /// Team owning the role.
    pub group_uri: String,

    #[serde(rename = "IAMRoleArn")]
    pub iam_role_arn: String,

    /// Whether data.all manages the role's policies.
    pub dataall_managed: bool,
}
