use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::MySqlConfig;

/// Server error code reported when dropping a database that does not exist
pub const ER_DB_DROP_EXISTS: u16 = 1008;

/// Errors reported by a database driver
#[derive(Debug, Clone, Error)]
pub enum DriverError {
    /// The server answered the statement with an error packet
    #[error("ERROR {code} ({state}): {message}")]
    Server {
        code: u16,
        state: String,
        message: String,
    },

    /// The connect timeout from the configuration elapsed
    #[error("timed out connecting to server")]
    Timeout,

    /// The driver refused the connection parameters
    #[error("invalid connection parameters: {0}")]
    InvalidConfig(String),

    /// Network, protocol or any other driver failure
    #[error("{0}")]
    Other(String),
}

impl DriverError {
    /// The engine error code, if the server reported one
    pub fn code(&self) -> Option<u16> {
        match self {
            DriverError::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for the "database doesn't exist" error raised by DROP DATABASE
    pub fn is_unknown_database(&self) -> bool {
        self.code() == Some(ER_DB_DROP_EXISTS)
    }
}

/// A single connection to the server, used without a default database
#[async_trait]
pub trait ServerConnection: Send + 'static {
    /// Check that the server is reachable and accepted our credentials
    async fn ping(&mut self) -> Result<(), DriverError>;

    /// Execute a statement that returns no rows
    async fn execute(&mut self, sql: &str) -> Result<(), DriverError>;

    /// Close the connection
    async fn close(self) -> Result<(), DriverError>;
}

/// Opens connections for a given configuration
#[async_trait]
pub trait Connector: Send + Sync {
    /// The type of connection this connector provides
    type Connection: ServerConnection;

    /// Open a connection using the given configuration
    async fn connect(&self, config: &MySqlConfig) -> Result<Self::Connection, DriverError>;
}

/// Await `fut`, failing with [`DriverError::Timeout`] once `timeout` elapses
#[cfg_attr(
    not(any(feature = "mysql", feature = "sqlx-mysql")),
    allow(dead_code)
)]
pub(crate) async fn with_timeout<T, E, F>(
    timeout: Option<Duration>,
    fut: F,
) -> Result<T, DriverError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<DriverError>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| DriverError::Timeout)?
            .map_err(Into::into),
        None => fut.await.map_err(Into::into),
    }
}
