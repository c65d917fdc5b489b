//! Common utilities for tests

use std::sync::Arc;

use mysql_tempdb::{env::test_config, Logger, MySqlConfig, TempDbError};
use parking_lot::Mutex;

/// Initialize tracing for tests if it hasn't been already
#[allow(dead_code)]
pub fn init_tracing() {
    mysql_tempdb::init_tracing();
}

/// Base configuration for tests, or `None` when no server is configured
#[allow(dead_code)]
pub fn server_config() -> Option<MySqlConfig> {
    match test_config() {
        Ok(config) if config.database_name.is_empty() => Some(config.with_database("tempdb")),
        Ok(config) => Some(config),
        Err(e) => {
            println!("Skipping test: {}", e);
            None
        }
    }
}

/// A suffix that is unique for this run
#[allow(dead_code)]
pub fn unique_suffix(name: &str) -> String {
    format!("{}_{}", name, uuid::Uuid::new_v4().simple())
}

#[allow(dead_code)]
pub fn is_unavailable(err: &TempDbError) -> bool {
    if err.is_connection_error() {
        println!("Skipping test: MySQL appears to be unavailable ({})", err);
        return true;
    }
    false
}

/// Logger that keeps every line for assertions
#[allow(dead_code)]
pub fn capture_logger() -> (Arc<dyn Logger>, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let logger = move |line: &str| sink.lock().push(line.to_string());
    (Arc::new(logger), lines)
}
