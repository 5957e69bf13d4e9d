//! Error types for the wavetour stats API.
//!
//! The enum is deliberately small: absence is signalled with `Ok(None)`
//! at the store seam and client-input problems are rejected before they
//! reach this layer, so only store, configuration, and internal
//! failures remain.

use thiserror::Error;

/// Result type alias using wavetour's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wavetour operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
