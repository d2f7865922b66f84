mod client;
mod errors;
pub mod ops;
mod request;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use self::ops::{ListFilter, Paged};
pub use self::request::{GqlRequest, OperationKind};
