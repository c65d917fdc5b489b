use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    backend::{Connector, ServerConnection},
    config::MySqlConfig,
    error::{ProvisionPhase, Result, TempDbError},
    logger::Logger,
    naming::{derive_name, sanitize_suffix, DatabaseName},
};

/// Build the DROP DATABASE statement for a temporary database.
///
/// The name is interpolated as-is, so it must come from [`derive_name`]
/// with a sanitized suffix.
pub fn drop_statement(name: &DatabaseName) -> String {
    format!("DROP DATABASE `{}`", name)
}

/// Build the CREATE DATABASE statement, with a COLLATE clause when
/// `collation` is not empty.
pub fn create_statement(name: &DatabaseName, collation: &str) -> String {
    if collation.is_empty() {
        format!("CREATE DATABASE `{}`", name)
    } else {
        format!("CREATE DATABASE `{}` COLLATE {}", name, collation)
    }
}

/// Drop and recreate a temporary database named after `config.database_name`
/// and `suffix`.
///
/// Returns a copy of `config` pointing at the new database together with the
/// [`TempDatabase`] handle that owns the server connection. Call
/// [`TempDatabase::cleanup`] when the tests are done with it.
///
/// The suffix is sanitized to contain only `[0-9a-zA-Z$_]` and joined with
/// the prefix using `_`. Use [`ensure_temp_db!`](crate::ensure_temp_db!) to
/// default it to the calling module path.
pub async fn ensure_temp_db<C: Connector>(
    connector: &C,
    logger: Arc<dyn Logger>,
    suffix: &str,
    config: &MySqlConfig,
) -> Result<(MySqlConfig, TempDatabase<C::Connection>)> {
    if suffix.is_empty() {
        return Err(TempDbError::config("temporary database suffix must not be empty"));
    }

    let mut config = config.clone();
    let prefix = std::mem::take(&mut config.database_name);

    debug!(host = %config.host, port = config.port, "Connecting to MySQL server");
    let mut conn = connector
        .connect(&config)
        .await
        .map_err(TempDbError::Connection)?;

    let name = match recreate(&mut conn, &prefix, suffix, &config.collation).await {
        Ok(name) => name,
        Err(e) => {
            close_connection(conn, logger.as_ref()).await;
            return Err(e);
        }
    };

    info!("Temporary database {} created", name);
    config.database_name = name.to_string();
    Ok((
        config,
        TempDatabase {
            name,
            conn: Some(conn),
            logger,
        },
    ))
}

async fn recreate<C: ServerConnection>(
    conn: &mut C,
    prefix: &str,
    suffix: &str,
    collation: &str,
) -> Result<DatabaseName> {
    conn.ping().await.map_err(TempDbError::Connection)?;

    let name = derive_name(prefix, &sanitize_suffix(suffix));

    match conn.execute(&drop_statement(&name)).await {
        Ok(()) => debug!("Dropped leftover database {}", name),
        Err(e) if e.is_unknown_database() => {}
        Err(source) => {
            return Err(TempDbError::Provision {
                phase: ProvisionPhase::DropExisting,
                source,
            })
        }
    }

    conn.execute(&create_statement(&name, collation))
        .await
        .map_err(|source| TempDbError::Provision {
            phase: ProvisionPhase::Create,
            source,
        })?;

    Ok(name)
}

/// A temporary database created by [`ensure_temp_db`].
///
/// Holds the server connection until [`cleanup`](TempDatabase::cleanup) drops
/// the database and closes it. Failures during cleanup are reported through
/// the logger only. Dropping the handle without calling `cleanup` leaves the
/// database behind and only closes the connection.
#[must_use = "call `cleanup` to drop the temporary database"]
pub struct TempDatabase<C: ServerConnection> {
    name: DatabaseName,
    conn: Option<C>,
    logger: Arc<dyn Logger>,
}

impl<C: ServerConnection> TempDatabase<C> {
    /// Name of the temporary database
    pub fn name(&self) -> &DatabaseName {
        &self.name
    }

    /// True once the database has been dropped and the connection released
    pub fn is_released(&self) -> bool {
        self.conn.is_none()
    }

    /// Drop the temporary database and close the connection.
    ///
    /// Calling this again only reports to the logger.
    pub async fn cleanup(&mut self) {
        match self.conn.take() {
            Some(conn) => release(conn, &self.name, self.logger.as_ref()).await,
            None => self.logger.print(&format!(
                "failed to drop temporary db: {} was already cleaned up",
                self.name
            )),
        }
    }
}

impl<C: ServerConnection> std::fmt::Debug for TempDatabase<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TempDatabase")
            .field("name", &self.name)
            .field("released", &self.is_released())
            .finish()
    }
}

// Only closes the connection; the next run with the same name replaces the database
impl<C: ServerConnection> Drop for TempDatabase<C> {
    fn drop(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        warn!("Temporary database {} was dropped without cleanup", self.name);
        self.logger.print(&format!(
            "temporary db {} was not cleaned up and is left behind",
            self.name
        ));
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let logger = self.logger.clone();
            handle.spawn(async move {
                close_connection(conn, logger.as_ref()).await;
            });
        }
    }
}

async fn release<C: ServerConnection>(mut conn: C, name: &DatabaseName, logger: &dyn Logger) {
    match conn.execute(&drop_statement(name)).await {
        Ok(()) => info!("Temporary database {} dropped", name),
        Err(e) => logger.print(&format!("failed to drop temporary db: {}", e)),
    }
    close_connection(conn, logger).await;
}

async fn close_connection<C: ServerConnection>(conn: C, logger: &dyn Logger) {
    if let Err(e) = conn.close().await {
        logger.print(&format!("failed to close db: {}", e));
    }
}

/// Provision a temporary database using the calling module path as suffix.
///
/// ```rust,ignore
/// let (config, mut temp_db) = ensure_temp_db!(MySqlAsyncConnector, Arc::new(TracingLogger), &base)?;
/// ```
#[macro_export]
macro_rules! ensure_temp_db {
    ($connector:expr, $logger:expr, $config:expr) => {
        $crate::ensure_temp_db(&$connector, $logger, ::std::module_path!(), $config)
    };
}
