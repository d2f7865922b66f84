//! GraphQL request descriptors produced by the operation builders.

use serde::Serialize;
use serde_json::Value;

/// Whether a document executes as a GraphQL query or mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A fully-formed GraphQL request: a document fixed at compile time plus the
/// variables for one invocation.
///
/// The builders constructing these are pure. They perform no I/O and no
/// validation, and the same arguments always produce an equal descriptor.
/// Malformed arguments travel to the server unchanged; validation failures
/// come back in the response's `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GqlRequest {
    /// Operation name sent alongside the document.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,

    /// The GraphQL document. Mutations post under the same `query` key, per
    /// GraphQL-over-HTTP.
    #[serde(rename = "query")]
    pub document: &'static str,

    /// Variables for this invocation.
    pub variables: Value,

    /// Query or mutation.
    #[serde(skip)]
    pub kind: OperationKind,

    /// Root field of `data` holding this operation's payload.
    #[serde(skip)]
    pub field: &'static str,
}

impl GqlRequest {
    /// Builds a read operation whose payload lives under `data.<name>`.
    pub fn query(name: &'static str, document: &'static str, variables: Value) -> Self {
        Self {
            operation_name: name,
            document,
            variables,
            kind: OperationKind::Query,
            field: name,
        }
    }

    /// Builds a write operation whose payload lives under `data.<name>`.
    pub fn mutation(name: &'static str, document: &'static str, variables: Value) -> Self {
        Self {
            operation_name: name,
            document,
            variables,
            kind: OperationKind::Mutation,
            field: name,
        }
    }
}
