//! Environment operations: linking, team invitations, and consumption roles.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const CREATE_ENVIRONMENT: &str = r#"
mutation createEnvironment($input: NewEnvironmentInput) {
  createEnvironment(input: $input) {
    environmentUri
    label
    owner
    AwsAccountId
    region
    SamlGroupName
    organizationUri
    description
    created
    stack {
      stackUri
      status
    }
  }
}
"#;

const UPDATE_ENVIRONMENT: &str = r#"
mutation updateEnvironment($environmentUri: String!, $input: ModifyEnvironmentInput) {
  updateEnvironment(environmentUri: $environmentUri, input: $input) {
    environmentUri
    label
    owner
    AwsAccountId
    region
    SamlGroupName
    organizationUri
    description
    created
  }
}
"#;

const GET_ENVIRONMENT: &str = r#"
query getEnvironment($environmentUri: String!) {
  getEnvironment(environmentUri: $environmentUri) {
    environmentUri
    label
    owner
    AwsAccountId
    region
    SamlGroupName
    organizationUri
    description
    created
    stack {
      stackUri
      status
    }
  }
}
"#;

const LIST_ENVIRONMENTS: &str = r#"
query listEnvironments($filter: EnvironmentFilter) {
  listEnvironments(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      environmentUri
      label
      owner
      AwsAccountId
      region
      SamlGroupName
      organizationUri
      description
      created
      stack {
        stackUri
        status
      }
    }
  }
}
"#;

const LIST_ENVIRONMENT_GROUPS: &str = r#"
query listEnvironmentGroups($environmentUri: String!, $filter: GroupFilter) {
  listEnvironmentGroups(environmentUri: $environmentUri, filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      groupUri
      environmentUri
      invitedBy
      environmentIAMRoleArn
      created
    }
  }
}
"#;

const INVITE_GROUP_TO_ENVIRONMENT: &str = r#"
mutation inviteGroupToEnvironment($input: InviteGroupToEnvironmentInput!) {
  inviteGroupToEnvironment(input: $input) {
    groupUri
    environmentUri
    invitedBy
    environmentIAMRoleArn
    created
  }
}
"#;

const REMOVE_GROUP_FROM_ENVIRONMENT: &str = r#"
mutation removeGroupFromEnvironment($environmentUri: String!, $groupUri: String!) {
  removeGroupFromEnvironment(environmentUri: $environmentUri, groupUri: $groupUri)
}
"#;

const ADD_CONSUMPTION_ROLE: &str = r#"
mutation addConsumptionRoleToEnvironment($input: AddConsumptionRoleToEnvironmentInput!) {
  addConsumptionRoleToEnvironment(input: $input) {
    consumptionRoleUri
    consumptionRoleName
    environmentUri
    groupUri
    IAMRoleArn
    dataallManaged
  }
}
"#;

const LIST_CONSUMPTION_ROLES: &str = r#"
query listEnvironmentConsumptionRoles($environmentUri: String!, $filter: ConsumptionRoleFilter) {
  listEnvironmentConsumptionRoles(environmentUri: $environmentUri, filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      consumptionRoleUri
      consumptionRoleName
      environmentUri
      groupUri
      IAMRoleArn
      dataallManaged
    }
  }
}
"#;

const UPDATE_CONSUMPTION_ROLE: &str = r#"
mutation updateConsumptionRole($environmentUri: String!, $consumptionRoleUri: String!, $input: UpdateConsumptionRoleInput!) {
  updateConsumptionRole(environmentUri: $environmentUri, consumptionRoleUri: $consumptionRoleUri, input: $input) {
    consumptionRoleUri
    consumptionRoleName
    environmentUri
    groupUri
    IAMRoleArn
    dataallManaged
  }
}
"#;

const REMOVE_CONSUMPTION_ROLE: &str = r#"
mutation removeConsumptionRoleFromEnvironment($environmentUri: String!, $consumptionRoleUri: String!) {
  removeConsumptionRoleFromEnvironment(environmentUri: $environmentUri, consumptionRoleUri: $consumptionRoleUri)
}
"#;

/// Input for [`create_environment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnvironmentInput {
    pub label: String,
    pub organization_uri: String,
    #[serde(rename = "AwsAccountId")]
    pub aws_account_id: String,
    pub region: String,
    #[serde(rename = "SamlGroupName")]
    pub saml_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Input for [`update_environment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyEnvironmentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Input for [`invite_group_to_environment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteGroupInput {
    pub environment_uri: String,
    pub group_uri: String,
    /// Permission names granted to the invited team.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(rename = "environmentIAMRoleArn", skip_serializing_if = "Option::is_none")]
    pub environment_iam_role_arn: Option<String>,
}

/// Input for [`add_consumption_role_to_environment`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConsumptionRoleInput {
    pub environment_uri: String,
    pub group_uri: String,
    pub consumption_role_name: String,
    #[serde(rename = "IAMRoleArn")]
    pub iam_role_arn: String,
    pub dataall_managed: bool,
}

/// Input for [`update_consumption_role`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConsumptionRoleInput {
    pub consumption_role_name: String,
    pub group_uri: String,
}

/// Filter for [`list_environments`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFilter {
    #[serde(flatten)]
    pub common: ListFilter,
    /// Restrict to environments where the caller holds one of these roles.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(rename = "SamlGroupName", skip_serializing_if = "Option::is_none")]
    pub saml_group_name: Option<String>,
}

impl Paged for EnvironmentFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

impl EnvironmentFilter {
    pub fn with_role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }
    pub fn with_saml_group_name(mut self, group: &str) -> Self {
        self.saml_group_name = Some(group.to_string());
        self
    }
}

/// Filter for [`list_environment_groups`] and [`list_environment_consumption_roles`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFilter {
    #[serde(flatten)]
    pub common: ListFilter,
}

impl Paged for GroupFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

pub fn create_environment(input: &NewEnvironmentInput) -> GqlRequest {
    GqlRequest::mutation("createEnvironment", CREATE_ENVIRONMENT, json!({ "input": input }))
}

pub fn update_environment(environment_uri: &str, input: &ModifyEnvironmentInput) -> GqlRequest {
    GqlRequest::mutation(
        "updateEnvironment",
        UPDATE_ENVIRONMENT,
        json!({ "environmentUri": environment_uri, "input": input }),
    )
}

pub fn get_environment(environment_uri: &str) -> GqlRequest {
    GqlRequest::query(
        "getEnvironment",
        GET_ENVIRONMENT,
        json!({ "environmentUri": environment_uri }),
    )
}

pub fn list_environments(filter: &EnvironmentFilter) -> GqlRequest {
    GqlRequest::query("listEnvironments", LIST_ENVIRONMENTS, json!({ "filter": filter }))
}

pub fn list_environment_groups(environment_uri: &str, filter: &GroupFilter) -> GqlRequest {
    GqlRequest::query(
        "listEnvironmentGroups",
        LIST_ENVIRONMENT_GROUPS,
        json!({ "environmentUri": environment_uri, "filter": filter }),
    )
}

pub fn invite_group_to_environment(input: &InviteGroupInput) -> GqlRequest {
    GqlRequest::mutation(
        "inviteGroupToEnvironment",
        INVITE_GROUP_TO_ENVIRONMENT,
        json!({ "input": input }),
    )
}

pub fn remove_group_from_environment(environment_uri: &str, group_uri: &str) -> GqlRequest {
    GqlRequest::mutation(
        "removeGroupFromEnvironment",
        REMOVE_GROUP_FROM_ENVIRONMENT,
        json!({ "environmentUri": environment_uri, "groupUri": group_uri }),
    )
}

pub fn add_consumption_role_to_environment(input: &AddConsumptionRoleInput) -> GqlRequest {
    GqlRequest::mutation(
        "addConsumptionRoleToEnvironment",
        ADD_CONSUMPTION_ROLE,
        json!({ "input": input }),
    )
}

pub fn list_environment_consumption_roles(
    environment_uri: &str,
    filter: &GroupFilter,
) -> GqlRequest {
    GqlRequest::query(
        "listEnvironmentConsumptionRoles",
        LIST_CONSUMPTION_ROLES,
        json!({ "environmentUri": environment_uri, "filter": filter }),
    )
}

pub fn update_consumption_role(
    environment_uri: &str,
    consumption_role_uri: &str,
    input: &UpdateConsumptionRoleInput,
) -> GqlRequest {
    GqlRequest::mutation(
        "updateConsumptionRole",
        UPDATE_CONSUMPTION_ROLE,
        json!({
            "environmentUri": environment_uri,
            "consumptionRoleUri": consumption_role_uri,
            "input": input,
        }),
    )
}

pub fn remove_consumption_role_from_environment(
    environment_uri: &str,
    consumption_role_uri: &str,
) -> GqlRequest {
    GqlRequest::mutation(
        "removeConsumptionRoleFromEnvironment",
        REMOVE_CONSUMPTION_ROLE,
        json!({
            "environmentUri": environment_uri,
            "consumptionRoleUri": consumption_role_uri,
        }),
    )
}
