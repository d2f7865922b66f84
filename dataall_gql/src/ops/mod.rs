mod common;
pub use self::common::{ListFilter, Paged};

pub mod dataset;
pub use self::dataset::{DatasetFilter, TableFilter};

pub mod environment;
pub use self::environment::{EnvironmentFilter, GroupFilter};

pub mod pipeline;
pub use self::pipeline::DataPipelineFilter;

pub mod redshift;
pub use self::redshift::ConnectionFilter;

pub mod share;
pub use self::share::ShareObjectFilter;

pub mod worksheet;
pub use self::worksheet::WorksheetFilter;
