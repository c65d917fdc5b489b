use std::sync::OnceLock;
use std::time::Duration;

use crate::{
    config::MySqlConfig,
    error::{Result, TempDbError},
};

/// Connect timeout used by [`test_config`] before scaling
pub const BASE_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// A static cell that ensures environment variables are loaded only once
static ENV_LOADED: OnceLock<()> = OnceLock::new();

/// Loads environment variables from a .env file if they haven't been loaded yet.
fn load_env() {
    ENV_LOADED.get_or_init(|| {
        dotenvy::dotenv().ok();
    });
}

/// Gets the MySQL server URL used for tests.
///
/// Looks for `MYSQL_TEST_URL` first and falls back to `DATABASE_URL`. The
/// database part of the URL is used as the temporary database prefix.
pub fn get_mysql_url() -> Result<String> {
    load_env();
    std::env::var("MYSQL_TEST_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| {
            TempDbError::config("MYSQL_TEST_URL or DATABASE_URL environment variable not found")
        })
}

/// Multiplier for test timeouts, read from `TEST_TIME_FACTOR` (default 1.0)
pub fn time_factor() -> Result<f64> {
    load_env();
    match std::env::var("TEST_TIME_FACTOR") {
        Ok(raw) => parse_time_factor(&raw),
        Err(_) => Ok(1.0),
    }
}

fn parse_time_factor(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(factor) if factor.is_finite() && factor > 0.0 => Ok(factor),
        _ => Err(TempDbError::config(format!(
            "TEST_TIME_FACTOR must be a positive number, got '{}'",
            raw
        ))),
    }
}

/// Server configuration for tests, built from [`get_mysql_url`] with a
/// connect timeout of [`BASE_CONNECT_TIMEOUT`] scaled by [`time_factor`].
pub fn test_config() -> Result<MySqlConfig> {
    let config = MySqlConfig::from_url(&get_mysql_url()?)?;
    let timeout = BASE_CONNECT_TIMEOUT.mul_f64(time_factor()?);
    Ok(config.with_connect_timeout(timeout))
}
