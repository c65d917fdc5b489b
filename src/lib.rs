//! Temporary MySQL databases for test runs.
//!
//! [`ensure_temp_db`] drops and recreates a database named after the
//! configured database name and a caller-chosen suffix, and hands back a
//! [`TempDatabase`] that removes it again once the tests are done.

pub mod backend;
pub mod backends;
pub mod config;
pub mod env;
pub mod error;
pub mod logger;
pub mod naming;
pub mod tempdb;
pub mod tracing;

pub mod prelude;

pub use backend::{Connector, DriverError, ServerConnection};
#[cfg(feature = "mysql")]
pub use backends::MySqlAsyncConnector;
#[cfg(feature = "sqlx-mysql")]
pub use backends::SqlxMySqlConnector;
pub use config::MySqlConfig;
pub use error::{ProvisionPhase, Result, TempDbError};
pub use logger::{Logger, TracingLogger};
pub use naming::{derive_name, sanitize_suffix, DatabaseName};
pub use tempdb::{ensure_temp_db, TempDatabase};
pub use crate::tracing::init_tracing;
