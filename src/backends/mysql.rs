use async_trait::async_trait;
use mysql_async::{prelude::Queryable, Conn, Opts, OptsBuilder};

use crate::{
    backend::{with_timeout, Connector, DriverError, ServerConnection},
    config::MySqlConfig,
};

impl From<mysql_async::Error> for DriverError {
    fn from(error: mysql_async::Error) -> Self {
        match error {
            mysql_async::Error::Server(e) => DriverError::Server {
                code: e.code,
                state: e.state,
                message: e.message,
            },
            mysql_async::Error::Url(e) => DriverError::InvalidConfig(e.to_string()),
            other => DriverError::Other(other.to_string()),
        }
    }
}

/// Build mysql-async options; no database is selected when the name is empty
pub fn connect_options(config: &MySqlConfig) -> Opts {
    let db_name = if config.database_name.is_empty() {
        None
    } else {
        Some(config.database_name.clone())
    };

    OptsBuilder::default()
        .ip_or_hostname(config.host.clone())
        .tcp_port(config.port)
        .user(Some(config.user.clone()))
        .pass(config.password.clone())
        .db_name(db_name)
        .prefer_socket(false)
        .into()
}

/// A single mysql-async connection
pub struct MySqlAsyncConnection {
    conn: Conn,
}

#[async_trait]
impl ServerConnection for MySqlAsyncConnection {
    async fn ping(&mut self) -> Result<(), DriverError> {
        self.conn.ping().await?;
        Ok(())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), DriverError> {
        self.conn.query_drop(sql).await?;
        Ok(())
    }

    async fn close(self) -> Result<(), DriverError> {
        self.conn.disconnect().await?;
        Ok(())
    }
}

/// Opens connections with the mysql-async driver
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlAsyncConnector;

#[async_trait]
impl Connector for MySqlAsyncConnector {
    type Connection = MySqlAsyncConnection;

    async fn connect(&self, config: &MySqlConfig) -> Result<Self::Connection, DriverError> {
        let conn = with_timeout(config.connect_timeout, Conn::new(connect_options(config))).await?;
        tracing::debug!("Connected to {}:{}", config.host, config.port);
        Ok(MySqlAsyncConnection { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_keeps_code() {
        let error = mysql_async::Error::Server(mysql_async::ServerError {
            code: 1008,
            message: "Can't drop database 'x'; database doesn't exist".to_string(),
            state: "HY000".to_string(),
        });

        let driver_error = DriverError::from(error);
        assert!(driver_error.is_unknown_database());
    }

    #[test]
    fn test_connect_options_without_database() {
        let config = MySqlConfig::default().with_database("app");

        let opts = connect_options(&config);
        assert_eq!(opts.db_name(), Some("app"));

        let opts = connect_options(&config.server_scoped());
        assert_eq!(opts.db_name(), None);
        assert_eq!(opts.tcp_port(), 3306);
        assert_eq!(opts.ip_or_hostname(), "localhost");
    }
}
