//! Worksheet types and Athena query execution results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a worksheet.
pub type WorksheetUri = String;

/// A saved SQL workspace with its last query state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub worksheet_uri: WorksheetUri,

    pub label: String,

    pub owner: String,

    /// IdP group administering the worksheet.
    #[serde(rename = "SamlAdminGroupName")]
    pub saml_admin_group_name: Option<String>,

    pub description: Option<String>,

    /// SQL body as last saved.
    pub sql_body: Option<String>,

    pub created: Option<NaiveDateTime>,

    /// Most recent successful query result, when one exists.
    pub last_saved_query_result: Option<AthenaQueryResult>,
}

/// A grant of access to a worksheet for another principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetShare {
    pub worksheet_share_uri: String,

    pub worksheet_uri: WorksheetUri,

    pub principal_id: String,

    pub principal_type: String,

    pub can_edit: bool,
}

/// Execution state of an Athena query started from a worksheet.
///
/// `rows` and `columns` are populated once the query has succeeded; until
/// then only the identifiers and status carry information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthenaQueryResult {
    #[serde(rename = "AthenaQueryId")]
    pub athena_query_id: String,

    #[serde(rename = "Status")]
    pub status: QueryStatus,

    /// Server-reported failure reason, when the query failed.
    #[serde(rename = "Error")]
    pub error: Option<String>,

    #[serde(rename = "ElapsedTimeInMs")]
    pub elapsed_time_in_ms: Option<i64>,

    #[serde(rename = "DataScannedInBytes")]
    pub data_scanned_in_bytes: Option<i64>,

    /// S3 location of the full result set.
    #[serde(rename = "OutputLocation")]
    pub output_location: Option<String>,

    #[serde(default)]
    pub rows: Vec<QueryResultRow>,

    #[serde(default)]
    pub columns: Vec<QueryResultColumn>,
}

/// One result row; cells align with `columns` by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResultRow {
    pub cells: Vec<Option<String>>,
}

/// Name and Athena type of one result column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResultColumn {
    pub column_name: String,
    pub type_name: String,
}

/// Athena query lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl QueryStatus {
    /// Whether the query has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            QueryStatus::Succeeded | QueryStatus::Failed | QueryStatus::Cancelled
        )
    }
}

impl std::fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                QueryStatus::Queued => "QUEUED",
                QueryStatus::Running => "RUNNING",
                QueryStatus::Succeeded => "SUCCEEDED",
                QueryStatus::Failed => "FAILED",
                QueryStatus::Cancelled => "CANCELLED",
            }
        )
    }
}
