mod dataset;
mod environment;
mod paging;
mod pipeline;
mod redshift;
mod response;
mod share;
mod worksheet;

pub use self::dataset::{Dataset, DatasetTable, DatasetUri, TableDataFilter, TableUri};
pub use self::environment::{
    ConsumptionRole, Environment, EnvironmentGroup, EnvironmentUri, Stack,
};
pub use self::paging::PagedResponse;
pub use self::pipeline::DataPipeline;
pub use self::redshift::RedshiftConnection;
pub use self::response::{GqlError, GqlResponse};
pub use self::share::{ShareDatasetRef, ShareObject, SharePrincipal, ShareStats};
pub use self::worksheet::{
    AthenaQueryResult, QueryResultColumn, QueryResultRow, QueryStatus, Worksheet, WorksheetShare,
    WorksheetUri,
};
