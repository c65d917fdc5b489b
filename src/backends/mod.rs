#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "sqlx-mysql")]
pub mod sqlx_mysql;

#[cfg(feature = "mysql")]
pub use mysql::{MySqlAsyncConnection, MySqlAsyncConnector};
#[cfg(feature = "sqlx-mysql")]
pub use sqlx_mysql::{SqlxMySqlConnector, SqlxServerConnection};
