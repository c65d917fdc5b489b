use std::fmt;

use thiserror::Error;

use crate::backend::DriverError;

/// The statement that was being executed when provisioning failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionPhase {
    /// Dropping a leftover database with the derived name
    DropExisting,
    /// Creating the fresh temporary database
    Create,
}

impl fmt::Display for ProvisionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionPhase::DropExisting => write!(f, "drop"),
            ProvisionPhase::Create => write!(f, "create"),
        }
    }
}

/// Error type for temporary database provisioning
#[derive(Debug, Error)]
pub enum TempDbError {
    /// Invalid configuration or arguments
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server could not be reached or rejected the connection
    #[error("Connection error: {0}")]
    Connection(#[source] DriverError),

    /// A DROP or CREATE DATABASE statement failed
    #[error("failed to {phase} temporary db: {source}")]
    Provision {
        phase: ProvisionPhase,
        #[source]
        source: DriverError,
    },
}

impl TempDbError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        TempDbError::Config(message.into())
    }

    /// True when the server could not be reached at all
    pub fn is_connection_error(&self) -> bool {
        matches!(self, TempDbError::Connection(_))
    }
}

impl From<url::ParseError> for TempDbError {
    fn from(error: url::ParseError) -> Self {
        TempDbError::Config(format!("Invalid URL: {}", error))
    }
}

/// Result type for temporary database operations
pub type Result<T> = std::result::Result<T, TempDbError>;
