//! Error types for NextUp operations

use thiserror::Error;

/// Cache layer errors.
///
/// Absence is never an error: "key not found" and "key expired" both read
/// as `None`. The only failing paths are serde round-trips and wildcard
/// pattern compilation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("Failed to serialize value for key {key}: {reason}")]
    Serialize { key: String, reason: String },

    #[error("Failed to deserialize cached value for key {key}: {reason}")]
    Deserialize { key: String, reason: String },

    #[error("Invalid key pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Master error type for all NextUp errors.
#[derive(Debug, Clone, Error)]
pub enum NextUpError {
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Result type alias for NextUp operations.
pub type NextUpResult<T> = Result<T, NextUpError>;

// =============================================================================
// TESTS
// =============================================================================
