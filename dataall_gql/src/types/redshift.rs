//! Redshift connection types returned by the API.

use serde::{Deserialize, Serialize};

/// A stored connection to a Redshift cluster or serverless workgroup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedshiftConnection {
    pub connection_uri: String,

    pub name: String,

    pub environment_uri: String,

    /// Team owning the connection.
    #[serde(rename = "SamlGroupName")]
    pub saml_group_name: String,

    /// `cluster` or `serverless`.
    pub redshift_type: String,

    pub cluster_id: Option<String>,

    pub workgroup: Option<String>,

    pub database: String,

    pub redshift_user: Option<String>,

    /// Secrets Manager ARN holding the credentials, when secret-based.
    pub secret_arn: Option<String>,

    /// `ADMIN` or `DATA_USER`.
    pub connection_type: Option<String>,
}
