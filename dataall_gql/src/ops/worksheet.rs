//! Worksheet operations: CRUD, sharing, and Athena query execution.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const GET_WORKSHEET: &str = r#"
query getWorksheet($worksheetUri: String!) {
  getWorksheet(worksheetUri: $worksheetUri) {
    worksheetUri
    label
    owner
    SamlAdminGroupName
    description
    sqlBody
    created
    lastSavedQueryResult {
      AthenaQueryId
      Status
      Error
      ElapsedTimeInMs
      DataScannedInBytes
      OutputLocation
      rows {
        cells
      }
      columns {
        columnName
        typeName
      }
    }
  }
}
"#;

const LIST_WORKSHEETS: &str = r#"
query listWorksheets($filter: WorksheetFilter) {
  listWorksheets(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      worksheetUri
      label
      owner
      SamlAdminGroupName
      description
      created
    }
  }
}
"#;

const CREATE_WORKSHEET: &str = r#"
mutation createWorksheet($input: NewWorksheetInput) {
  createWorksheet(input: $input) {
    worksheetUri
    label
    owner
    SamlAdminGroupName
    description
    sqlBody
    created
  }
}
"#;

const UPDATE_WORKSHEET: &str = r#"
mutation updateWorksheet($worksheetUri: String!, $input: UpdateWorksheetInput) {
  updateWorksheet(worksheetUri: $worksheetUri, input: $input) {
    worksheetUri
    label
    description
    sqlBody
  }
}
"#;

const DELETE_WORKSHEET: &str = r#"
mutation deleteWorksheet($worksheetUri: String!) {
  deleteWorksheet(worksheetUri: $worksheetUri)
}
"#;

const SHARE_WORKSHEET: &str = r#"
mutation shareWorksheet($worksheetUri: String!, $input: WorksheetShareInput!) {
  shareWorksheet(worksheetUri: $worksheetUri, input: $input) {
    worksheetShareUri
    worksheetUri
    principalId
    principalType
    canEdit
  }
}
"#;

const START_WORKSHEET_QUERY: &str = r#"
mutation startWorksheetQuery($worksheetUri: String!, $input: WorksheetQueryInput!) {
  startWorksheetQuery(worksheetUri: $worksheetUri, input: $input) {
    AthenaQueryId
    Status
    Error
    ElapsedTimeInMs
    DataScannedInBytes
    OutputLocation
    rows {
      cells
    }
    columns {
      columnName
      typeName
    }
  }
}
"#;

const POLL_WORKSHEET_QUERY: &str = r#"
query pollWorksheetQuery($worksheetUri: String!, $AthenaQueryId: String!) {
  pollWorksheetQuery(worksheetUri: $worksheetUri, AthenaQueryId: $AthenaQueryId) {
    AthenaQueryId
    Status
    Error
    ElapsedTimeInMs
    DataScannedInBytes
    OutputLocation
    rows {
      cells
    }
    columns {
      columnName
      typeName
    }
  }
}
"#;

/// Filter for [`list_worksheets`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetFilter {
    #[serde(flatten)]
    pub common: ListFilter,
}

impl Paged for WorksheetFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

/// Input for [`create_worksheet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorksheetInput {
    pub label: String,
    #[serde(rename = "SamlAdminGroupName")]
    pub saml_admin_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Input for [`update_worksheet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorksheetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_body: Option<String>,
}

/// Input for [`share_worksheet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetShareInput {
    pub principal_id: String,
    /// `Group` or `User`.
    pub principal_type: String,
    pub can_edit: bool,
}

/// Input for [`start_worksheet_query`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQueryInput {
    pub environment_uri: String,
    pub sql_body: String,
}

pub fn get_worksheet(worksheet_uri: &str) -> GqlRequest {
    GqlRequest::query(
        "getWorksheet",
        GET_WORKSHEET,
        json!({ "worksheetUri": worksheet_uri }),
    )
}

pub fn list_worksheets(filter: &WorksheetFilter) -> GqlRequest {
    GqlRequest::query("listWorksheets", LIST_WORKSHEETS, json!({ "filter": filter }))
}

pub fn create_worksheet(input: &NewWorksheetInput) -> GqlRequest {
    GqlRequest::mutation("createWorksheet", CREATE_WORKSHEET, json!({ "input": input }))
}

pub fn update_worksheet(worksheet_uri: &str, input: &UpdateWorksheetInput) -> GqlRequest {
    GqlRequest::mutation(
        "updateWorksheet",
        UPDATE_WORKSHEET,
        json!({ "worksheetUri": worksheet_uri, "input": input }),
    )
}

pub fn delete_worksheet(worksheet_uri: &str) -> GqlRequest {
    GqlRequest::mutation(
        "deleteWorksheet",
        DELETE_WORKSHEET,
        json!({ "worksheetUri": worksheet_uri }),
    )
}

pub fn share_worksheet(worksheet_uri: &str, input: &WorksheetShareInput) -> GqlRequest {
    GqlRequest::mutation(
        "shareWorksheet",
        SHARE_WORKSHEET,
        json!({ "worksheetUri": worksheet_uri, "input": input }),
    )
}

pub fn start_worksheet_query(worksheet_uri: &str, input: &StartQueryInput) -> GqlRequest {
    GqlRequest::mutation(
        "startWorksheetQuery",
        START_WORKSHEET_QUERY,
        json!({ "worksheetUri": worksheet_uri, "input": input }),
    )
}

pub fn poll_worksheet_query(worksheet_uri: &str, athena_query_id: &str) -> GqlRequest {
    GqlRequest::query(
        "pollWorksheetQuery",
        POLL_WORKSHEET_QUERY,
        json!({ "worksheetUri": worksheet_uri, "AthenaQueryId": athena_query_id }),
    )
}
