//! Shared error type across spacecapy crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SpaceCapyError>;

/// Unified error type used by core and web.
#[derive(Debug, Error)]
pub enum SpaceCapyError {
    #[error("config: {0}")]
    Config(String),
    #[error("database: {0}")]
    Database(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SpaceCapyError {
    /// Stable error code, used in HTTP error bodies and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            SpaceCapyError::Config(_) => "CONFIG",
            SpaceCapyError::Database(_) => "DATABASE",
            SpaceCapyError::Internal(_) => "INTERNAL",
        }
    }
}
