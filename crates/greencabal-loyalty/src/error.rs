//! Error types for the accrual engine.
//!
//! Recording and querying never fail. Errors only arise at the edges:
//! importing a counter from an untyped source, or building a custom policy.

use thiserror::Error;

/// Result type for loyalty operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An imported action count was negative
    #[error("Negative qualifying action count: {0}")]
    NegativeActionCount(i64),

    /// A policy must require at least one action per percent
    #[error("Actions per percent must be at least 1")]
    ZeroActionsPerPercent,

    /// A policy cap above 100% makes no sense as a discount
    #[error("Maximum discount {0}% exceeds 100%")]
    CapAboveHundred(u32),
}
