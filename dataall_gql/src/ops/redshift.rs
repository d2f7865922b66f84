//! Redshift operations: cluster dataset listings and stored connections.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const LIST_REDSHIFT_CLUSTER_DATASETS: &str = r#"
query listRedshiftClusterDatasets($clusterUri: String!, $filter: DatasetFilter) {
  listRedshiftClusterDatasets(clusterUri: $clusterUri, filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      datasetUri
      label
      owner
      region
      SamlAdminGroupName
      GlueDatabaseName
      S3BucketName
      description
      created
    }
  }
}
"#;

const LIST_REDSHIFT_CONNECTIONS: &str = r#"
query listEnvironmentRedshiftConnections($filter: ConnectionFilter) {
  listEnvironmentRedshiftConnections(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      connectionUri
      name
      environmentUri
      SamlGroupName
      redshiftType
      clusterId
      workgroup
      database
      redshiftUser
      secretArn
      connectionType
    }
  }
}
"#;

const CREATE_REDSHIFT_CONNECTION: &str = r#"
mutation createRedshiftConnection($input: CreateRedshiftConnectionInput!) {
  createRedshiftConnection(input: $input) {
    connectionUri
    name
    environmentUri
    SamlGroupName
    redshiftType
    clusterId
    workgroup
    database
    redshiftUser
    secretArn
    connectionType
  }
}
"#;

const UPDATE_REDSHIFT_CONNECTION: &str = r#"
mutation updateRedshiftConnection($connectionUri: String!, $input: UpdateRedshiftConnectionInput!) {
  updateRedshiftConnection(connectionUri: $connectionUri, input: $input) {
    connectionUri
    name
    environmentUri
    SamlGroupName
    redshiftType
    clusterId
    workgroup
    database
    redshiftUser
    secretArn
    connectionType
  }
}
"#;

const DELETE_REDSHIFT_CONNECTION: &str = r#"
mutation deleteRedshiftConnection($connectionUri: String!) {
  deleteRedshiftConnection(connectionUri: $connectionUri)
}
"#;

/// Filter for [`list_environment_redshift_connections`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionFilter {
    #[serde(flatten)]
    pub common: ListFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_uri: Option<String>,
    /// `ADMIN` or `DATA_USER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
}

impl Paged for ConnectionFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

impl ConnectionFilter {
    pub fn with_environment_uri(mut self, environment_uri: &str) -> Self {
        self.environment_uri = Some(environment_uri.to_string());
        self
    }
    pub fn with_group_uri(mut self, group_uri: &str) -> Self {
        self.group_uri = Some(group_uri.to_string());
        self
    }
    pub fn with_connection_type(mut self, connection_type: &str) -> Self {
        self.connection_type = Some(connection_type.to_string());
        self
    }
}

/// Input for [`create_redshift_connection`] and, with the optional fields
/// only, [`update_redshift_connection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedshiftConnectionInput {
    pub name: String,
    pub environment_uri: String,
    #[serde(rename = "SamlGroupName")]
    pub saml_group_name: String,
    /// `cluster` or `serverless`.
    pub redshift_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workgroup: Option<String>,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redshift_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
}

pub fn list_redshift_cluster_datasets(
    cluster_uri: &str,
    filter: &super::dataset::DatasetFilter,
) -> GqlRequest {
    GqlRequest::query(
        "listRedshiftClusterDatasets",
        LIST_REDSHIFT_CLUSTER_DATASETS,
        json!({ "clusterUri": cluster_uri, "filter": filter }),
    )
}

pub fn list_environment_redshift_connections(filter: &ConnectionFilter) -> GqlRequest {
    GqlRequest::query(
        "listEnvironmentRedshiftConnections",
        LIST_REDSHIFT_CONNECTIONS,
        json!({ "filter": filter }),
    )
}

pub fn create_redshift_connection(input: &RedshiftConnectionInput) -> GqlRequest {
    GqlRequest::mutation(
        "createRedshiftConnection",
        CREATE_REDSHIFT_CONNECTION,
        json!({ "input": input }),
    )
}

pub fn update_redshift_connection(
    connection_uri: &str,
    input: &RedshiftConnectionInput,
) -> GqlRequest {
    GqlRequest::mutation(
        "updateRedshiftConnection",
        UPDATE_REDSHIFT_CONNECTION,
        json!({ "connectionUri": connection_uri, "input": input }),
    )
}

pub fn delete_redshift_connection(connection_uri: &str) -> GqlRequest {
    GqlRequest::mutation(
        "deleteRedshiftConnection",
        DELETE_REDSHIFT_CONNECTION,
        json!({ "connectionUri": connection_uri }),
    )
}
