//! Screen-state layer for the data.all console: list pagination state
//! machines, row edit grids, the error event channel, and the worksheet
//! query runner.
//!
//! Wraps the `dataall_gql` wire crate. Screens own their filter and paged
//! envelope, fetch through a shared [`Client`](dataall_gql::Client), and
//! report failures on an injected [`ErrorChannel`].

pub mod channel;
pub mod error;
pub mod grid;
pub mod list;
pub mod runner;
pub mod screen;

pub use dataall_gql;

pub use channel::{error_channel, ErrorChannel, ErrorFeed};
pub use error::ConsoleError;
pub use grid::{EditGrid, GridRow, RowState};
pub use list::{Fetch, ListPhase, ListState};
pub use runner::QueryRunner;
pub use screen::{ListOperation, ListScreen, Teardown, TeardownSignal};
