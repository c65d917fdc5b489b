use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlDatabaseError};
use sqlx::{Connection, Executor};

use crate::{
    backend::{with_timeout, Connector, DriverError, ServerConnection},
    config::MySqlConfig,
};

impl From<sqlx::Error> for DriverError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) => {
                match db_error.try_downcast_ref::<MySqlDatabaseError>() {
                    Some(e) => DriverError::Server {
                        code: e.number(),
                        state: e.code().unwrap_or_default().to_string(),
                        message: e.message().to_string(),
                    },
                    None => DriverError::Other(db_error.to_string()),
                }
            }
            sqlx::Error::Configuration(e) => DriverError::InvalidConfig(e.to_string()),
            other => DriverError::Other(other.to_string()),
        }
    }
}

/// Build SQLx connect options; no database is selected when the name is empty
pub fn connect_options(config: &MySqlConfig) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user);
    if let Some(password) = &config.password {
        options = options.password(password);
    }
    if !config.database_name.is_empty() {
        options = options.database(&config.database_name);
    }
    options
}

/// A single SQLx MySQL connection
pub struct SqlxServerConnection {
    conn: MySqlConnection,
}

#[async_trait]
impl ServerConnection for SqlxServerConnection {
    async fn ping(&mut self) -> Result<(), DriverError> {
        self.conn.ping().await?;
        Ok(())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        (&mut self.conn).execute(sql).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), DriverError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// Opens connections with SQLx
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlxMySqlConnector;

#[async_trait]
impl Connector for SqlxMySqlConnector {
    type Connection = SqlxServerConnection;

    async fn connect(&self, config: &MySqlConfig) -> Result<Self::Connection, DriverError> {
        let options = connect_options(config);
        let conn = with_timeout(config.connect_timeout, MySqlConnection::connect_with(&options))
            .await?;
        tracing::debug!("Connected to {}:{} with SQLx", config.host, config.port);
        Ok(SqlxServerConnection { conn })
    }
}
