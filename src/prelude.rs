pub use crate::backend::*;
#[cfg(feature = "mysql")]
pub use crate::backends::MySqlAsyncConnector;
#[cfg(feature = "sqlx-mysql")]
pub use crate::backends::SqlxMySqlConnector;
pub use crate::config::MySqlConfig;
pub use crate::ensure_temp_db;
pub use crate::env::*;
pub use crate::error::{Result, TempDbError};
pub use crate::logger::{Logger, TracingLogger};
pub use crate::tempdb::TempDatabase;
