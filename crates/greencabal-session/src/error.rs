//! Error types for account sessions.

use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in session operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Loyalty boundary error (e.g. negative imported count)
    #[error("Loyalty error: {0}")]
    Loyalty(#[from] greencabal_loyalty::Error),

    /// Unrecognized platform name
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Account store error
    #[error("Store error: {0}")]
    Store(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}
