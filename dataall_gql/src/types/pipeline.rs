//! Data pipeline types returned by the API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A CI/CD-managed data pipeline attached to an environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPipeline {
    #[serde(rename = "DataPipelineUri")]
    pub data_pipeline_uri: String,

    pub label: String,

    pub owner: String,

    /// IdP group administering the pipeline.
    #[serde(rename = "SamlGroupName")]
    pub saml_group_name: Option<String>,

    /// CodeCommit repository backing the pipeline.
    pub repo: Option<String>,

    /// Deployment strategy (e.g. `trunk`, `gitflow`).
    pub dev_strategy: Option<String>,

    pub description: Option<String>,

    pub created: Option<NaiveDateTime>,
}
