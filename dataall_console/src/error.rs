//! Error type for the console layer, wrapping wire-level failures.

use dataall_gql::Error as ApiError;

/// Errors produced by the console layer on top of the GraphQL client.
#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    /// The underlying GraphQL call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A started query did not reach a terminal status within the poll budget.
    #[error("query {athena_query_id} still running after {polls} polls")]
    QueryTimeout { athena_query_id: String, polls: u32 },
    /// The query reached a terminal Failed or Cancelled status.
    #[error("query failed: {message}")]
    QueryFailed { message: String },
}
