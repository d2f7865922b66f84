//! Share request types returned by the API.
//!
//! Share workflow states are server-defined and pass through as strings;
//! the client renders them without interpreting the state machine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A cross-team data-access request workflow record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareObject {
    pub share_uri: String,

    /// Workflow state (e.g. `Submitted`, `Approved`, `Rejected`).
    pub status: String,

    pub owner: String,

    pub created: Option<NaiveDateTime>,

    /// Dataset the request targets.
    pub dataset: Option<ShareDatasetRef>,

    /// Requesting team or consumption role.
    pub principal: Option<SharePrincipal>,

    pub statistics: Option<ShareStats>,
}

/// Dataset summary embedded in a share request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareDatasetRef {
    pub dataset_uri: String,
    pub dataset_name: String,
}

/// Principal a share grants access to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePrincipal {
    pub principal_id: String,

    /// `Group` or `ConsumptionRole`.
    pub principal_type: String,

    pub principal_name: Option<String>,

    pub environment_name: Option<String>,
}

/// Item counts on a share request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStats {
    pub tables: i64,
    pub locations: i64,
    pub shared_items: i64,
}
