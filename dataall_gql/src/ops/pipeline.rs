//! Data pipeline operations.

use serde::Serialize;
use serde_json::json;

use super::common::{ListFilter, Paged};
use crate::request::GqlRequest;

const LIST_DATA_PIPELINES: &str = r#"
query listDataPipelines($filter: DataPipelineFilter) {
  listDataPipelines(filter: $filter) {
    count
    page
    pages
    hasNext
    hasPrevious
    nodes {
      DataPipelineUri
      label
      owner
      SamlGroupName
      repo
      devStrategy
      description
      created
    }
  }
}
"#;

const GET_DATA_PIPELINE: &str = r#"
query getDataPipeline($DataPipelineUri: String!) {
  getDataPipeline(DataPipelineUri: $DataPipelineUri) {
    DataPipelineUri
    label
    owner
    SamlGroupName
    repo
    devStrategy
    description
    created
  }
}
"#;

/// Filter for [`list_data_pipelines`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPipelineFilter {
    #[serde(flatten)]
    pub common: ListFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Paged for DataPipelineFilter {
    fn common(&self) -> &ListFilter {
        &self.common
    }
    fn common_mut(&mut self) -> &mut ListFilter {
        &mut self.common
    }
}

impl DataPipelineFilter {
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

pub fn list_data_pipelines(filter: &DataPipelineFilter) -> GqlRequest {
    GqlRequest::query(
        "listDataPipelines",
        LIST_DATA_PIPELINES,
        json!({ "filter": filter }),
    )
}

pub fn get_data_pipeline(data_pipeline_uri: &str) -> GqlRequest {
    GqlRequest::query(
        "getDataPipeline",
        GET_DATA_PIPELINE,
        json!({ "DataPipelineUri": data_pipeline_uri }),
    )
}
