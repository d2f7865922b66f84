use serde::Deserialize;

/// Raw GraphQL response body: `data` plus a possibly-empty `errors` list.
#[derive(Debug, Deserialize)]
pub struct GqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GqlError>,
}

/// One server-side error entry. Only the message is consumed client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct GqlError {
    pub message: String,
}
