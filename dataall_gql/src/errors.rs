//! Error types for the GraphQL client.

/// Errors that can occur when executing a GraphQL operation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, unreadable body, or
    /// an undecodable payload).
    #[error("request failed")]
    RequestFailed,
    /// The endpoint returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The server resolved the operation with a populated `errors` list.
    /// `message` is the first error's message, verbatim.
    #[error("{message}")]
    GraphQl { message: String },
    /// A 2xx response whose `data` was missing or null.
    #[error("response carried no data")]
    EmptyResponse,
}

impl Error {
    /// The string a screen forwards to the error channel: the server's own
    /// message for GraphQL-level errors, the display form otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Error::GraphQl { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
