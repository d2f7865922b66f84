//! Share request operations.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const GET_SHARE_REQUESTS_FROM_ME: &str = r#"
query getShareRequestsFromMe($filter: ShareObjectFilter) {
  getShareRequestsFromMe(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      shareUri
      status
      owner
      created
      dataset {
        datasetUri
        datasetName
      }
      principal {
        principalId
        principalType
        principalName
        environmentName
      }
      statistics {
        tables
        locations
        sharedItems
      }
    }
  }
}
"#;

const GET_SHARE_REQUESTS_TO_ME: &str = r#"
query getShareRequestsToMe($filter: ShareObjectFilter) {
  getShareRequestsToMe(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      shareUri
      status
      owner
      created
      dataset {
        datasetUri
        datasetName
      }
      principal {
        principalId
        principalType
        principalName
        environmentName
      }
      statistics {
        tables
        locations
        sharedItems
      }
    }
  }
}
"#;

const GET_SHARE_OBJECT: &str = r#"
query getShareObject($shareUri: String!) {
  getShareObject(shareUri: $shareUri) {
    shareUri
    status
    owner
    created
    dataset {
      datasetUri
      datasetName
    }
    principal {
      principalId
      principalType
      principalName
      environmentName
    }
    statistics {
      tables
      locations
      sharedItems
    }
  }
}
"#;

/// Filter for the share request listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareObjectFilter {
    #[serde(flatten)]
    pub common: ListFilter,
    /// Restrict to requests in one of these workflow states.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl Paged for ShareObjectFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

impl ShareObjectFilter {
    pub fn with_status(mut self, status: &str) -> Self {
        self.status.push(status.to_string());
        self
    }
}

pub fn get_share_requests_from_me(filter: &ShareObjectFilter) -> GqlRequest {
    GqlRequest::query(
        "getShareRequestsFromMe",
        GET_SHARE_REQUESTS_FROM_ME,
        json!({ "filter": filter }),
    )
}

pub fn get_share_requests_to_me(filter: &ShareObjectFilter) -> GqlRequest {
    GqlRequest::query(
        "getShareRequestsToMe",
        GET_SHARE_REQUESTS_TO_ME,
        json!({ "filter": filter }),
    )
}

pub fn get_share_object(share_uri: &str) -> GqlRequest {
    GqlRequest::query("getShareObject", GET_SHARE_OBJECT, json!({ "shareUri": share_uri }))
}
