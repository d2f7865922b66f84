//! Dataset operations: catalog listings, table listings, and table data filters.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const LIST_DATASETS: &str = r#"
query listDatasets($filter: DatasetFilter) {
  listDatasets(filter: $filter) {
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

const GET_DATASET: &str = r#"
query getDataset($datasetUri: String!) {
  getDataset(datasetUri: $datasetUri) {
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
"#;

const CREATE_DATASET: &str = r#"
mutation createDataset($input: NewDatasetInput) {
  createDataset(input: $input) {
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
"#;

const LIST_DATASET_TABLES: &str = r#"
query listDatasetTables($datasetUri: String!, $filter: DatasetTableFilter) {
  listDatasetTables(datasetUri: $datasetUri, filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      tableUri
      datasetUri
      label
      GlueTableName
      description
    }
  }
}
"#;

const LIST_TABLE_DATA_FILTERS: &str = r#"
query listTableDataFilters($tableUri: String!, $filter: DataFilterFilter) {
  listTableDataFilters(tableUri: $tableUri, filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      filterUri
      label
      filterType
      description
      includedCols
      rowExpression
    }
  }
}
"#;

const CREATE_TABLE_DATA_FILTER: &str = r#"
mutation createTableDataFilter($tableUri: String!, $input: NewTableDataFilterInput!) {
  createTableDataFilter(tableUri: $tableUri, input: $input) {
    filterUri
    label
    filterType
    description
    includedCols
    rowExpression
  }
}
"#;

const DELETE_TABLE_DATA_FILTER: &str = r#"
mutation deleteTableDataFilter($filterUri: String!) {
  deleteTableDataFilter(filterUri: $filterUri)
}
"#;

/// Filter for [`list_datasets`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFilter {
    #[serde(flatten)]
    pub common: ListFilter,
    /// Restrict to datasets where the caller holds one of these roles.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Paged for DatasetFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

impl DatasetFilter {
    pub fn with_role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }
}

/// Filter for [`list_dataset_tables`] and [`list_table_data_filters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFilter {
    #[serde(flatten)]
    pub common: ListFilter,
}

impl Paged for TableFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

/// Input for [`create_dataset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDatasetInput {
    pub label: String,
    pub environment_uri: String,
    pub organization_uri: String,
    #[serde(rename = "SamlAdminGroupName")]
    pub saml_admin_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Input for [`create_table_data_filter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTableDataFilterInput {
    pub filter_name: String,
    /// `ROW` or `COLUMN`.
    pub filter_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Columns a COLUMN filter exposes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_cols: Vec<String>,
    /// SQL predicate a ROW filter applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_expression: Option<String>,
}

pub fn list_datasets(filter: &DatasetFilter) -> GqlRequest {
    GqlRequest::query("listDatasets", LIST_DATASETS, json!({ "filter": filter }))
}

pub fn get_dataset(dataset_uri: &str) -> GqlRequest {
    GqlRequest::query("getDataset", GET_DATASET, json!({ "datasetUri": dataset_uri }))
}

pub fn create_dataset(input: &NewDatasetInput) -> GqlRequest {
    GqlRequest::mutation("createDataset", CREATE_DATASET, json!({ "input": input }))
}

pub fn list_dataset_tables(dataset_uri: &str, filter: &TableFilter) -> GqlRequest {
    GqlRequest::query(
        "listDatasetTables",
        LIST_DATASET_TABLES,
        json!({ "datasetUri": dataset_uri, "filter": filter }),
    )
}

pub fn list_table_data_filters(table_uri: &str, filter: &TableFilter) -> GqlRequest {
    GqlRequest::query(
        "listTableDataFilters",
        LIST_TABLE_DATA_FILTERS,
        json!({ "tableUri": table_uri, "filter": filter }),
    )
}

pub fn create_table_data_filter(table_uri: &str, input: &NewTableDataFilterInput) -> GqlRequest {
    GqlRequest::mutation(
        "createTableDataFilter",
        CREATE_TABLE_DATA_FILTER,
        json!({ "tableUri": table_uri, "input": input }),
    )
}

pub fn delete_table_data_filter(filter_uri: &str) -> GqlRequest {
    GqlRequest::mutation(
        "deleteTableDataFilter",
        DELETE_TABLE_DATA_FILTER,
        json!({ "filterUri": filter_uri }),
    )
}
