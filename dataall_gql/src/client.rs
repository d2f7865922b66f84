//! HTTP client executing GraphQL operations against the data.all backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{request::GqlRequest, types::GqlResponse, Error};

/// Request timeout for GraphQL calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GraphQL-over-HTTP client for the data.all API.
///
/// Posts one operation per request to the `/graphql` endpoint and unwraps the
/// operation's root field from the response `data`. Performs no retries and
/// no caching; every call is a fresh round trip.
pub struct Client {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl Client {
    /// Creates a client for the given API base URL. The GraphQL endpoint is
    /// `<base>/graphql`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            api_url: format!("{}/graphql", base_url.trim_end_matches('/')),
            token: None,
        })
    }

    /// Attaches the bearer token sent with every request. Token acquisition
    /// and refresh live with the caller.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Executes a request and deserializes its root field into `T`.
    ///
    /// Mutations that resolve to `null` deserialize through `Option<_>`.
    pub async fn send<T: DeserializeOwned>(&self, request: &GqlRequest) -> Result<T, Error> {
        let mut call = self
            .http
            .post(&self.api_url)
            .header("accept", "application/json")
            .json(request);
        if let Some(token) = &self.token {
            call = call.bearer_auth(token);
        }
        let resp = call.send().await.map_err(|e| {
            tracing::error!("{} failed: {}", request.operation_name, e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!(
                "{} failed with status {}: {}",
                request.operation_name,
                status,
                snippet
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<GqlResponse<Value>>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse response: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::RequestFailed
        })?;

        if let Some(first) = parsed.errors.first() {
            tracing::error!("{} resolved with errors: {}", request.operation_name, first.message);
            return Err(Error::GraphQl {
                message: first.message.clone(),
            });
        }

        let mut data = match parsed.data {
            Some(Value::Object(map)) => map,
            _ => return Err(Error::EmptyResponse),
        };
        // A root field the server resolved to null is simply absent for some
        // mutations; both decode as JSON null.
        let payload = data.remove(request.field).unwrap_or(Value::Null);
        serde_json::from_value(payload).map_err(|e| {
            tracing::error!("Failed to decode {} payload: {}", request.field, e);
            Error::RequestFailed
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
