//! Dataset, table, and data-filter types returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a dataset.
pub type DatasetUri = String;

/// Unique identifier for a table within a dataset.
pub type TableUri = String;

/// A cataloged data asset backed by a Glue database and S3 bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub dataset_uri: DatasetUri,

    pub label: String,

    pub owner: String,

    pub region: Option<String>,

    /// IdP group administering the dataset.
    #[serde(rename = "SamlAdminGroupName")]
    pub saml_admin_group_name: Option<String>,

    #[serde(rename = "GlueDatabaseName")]
    pub glue_database_name: Option<String>,

    #[serde(rename = "S3BucketName")]
    pub s3_bucket_name: Option<String>,

    pub description: Option<String>,

    pub created: Option<NaiveDateTime>,
}

/// A Glue table cataloged under a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetTable {
    pub table_uri: TableUri,

    pub dataset_uri: DatasetUri,

    pub label: String,

    #[serde(rename = "GlueTableName")]
    pub glue_table_name: String,

    pub description: Option<String>,
}

/// A row- or column-level filter attached to a table for fine-grained shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDataFilter {
    pub filter_uri: String,

    pub label: String,

    /// `ROW` or `COLUMN`.
    pub filter_type: String,

    pub description: Option<String>,

    /// Columns exposed by a COLUMN filter.
    #[serde(default)]
    pub included_cols: Vec<String>,

    /// SQL predicate applied by a ROW filter.
    pub row_expression: Option<String>,
}
