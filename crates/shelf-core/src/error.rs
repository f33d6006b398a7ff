//! Error types for catalog operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages. The in-memory catalog never fails, but the trait
//! carries an error channel so fallible backends can implement it.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Catalog backend error
    #[error("Catalog error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
