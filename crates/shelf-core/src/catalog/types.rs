//! The `Book` record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Books carry no identity beyond value equality of their fields; the catalog
/// does not enforce uniqueness of titles. A book is never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title (non-empty expected but not enforced)
    pub title: String,

    /// Book author
    pub author: String,

    /// Publication year
    pub year: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}
