//! Database access: pool setup, the query executor seam, and value decoding.

pub mod executor;
pub mod pool;
pub mod value;

pub use executor::{PgExecutor, QueryExecutor};
pub use pool::{connect, server_version};
pub use value::SqlValue;
