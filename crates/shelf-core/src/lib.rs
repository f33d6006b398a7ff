//! # Shelf Core
//!
//! Core library for Shelf - a small, interactive, in-memory book catalog.
//!
//! This crate provides the domain types and the catalog abstraction
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **catalog**: The `Book` record, the `Catalog` trait, and the in-memory
//!   implementation
//! - **error**: Error types shared by catalog backends

pub mod catalog;
pub mod error;

pub use catalog::{Book, Catalog, MemoryCatalog};
pub use error::{Result, ShelfError};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
