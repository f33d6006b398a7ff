//! The `Library` facade.
//!
//! Translates the named catalog operations into mutations on the wrapped
//! `Catalog` and emits the user-facing confirmation after each one. The
//! catalog is injected at construction and fixed for the facade's lifetime.

use shelf_core::{Book, Catalog};

use crate::output;
use crate::ui::{render, Badge, UiContext};

pub struct Library {
    catalog: Box<dyn Catalog>,
    ui: UiContext,
    quiet: bool,
}

impl Library {
    pub fn new(catalog: Box<dyn Catalog>, ui: UiContext, quiet: bool) -> Self {
        Self { catalog, ui, quiet }
    }

    /// Construct a book and append it to the catalog.
    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> anyhow::Result<()> {
        self.catalog.add(Book::new(title, author, year))?;
        self.confirm(&format!(
            "Book with name \"{}\" was added successfully",
            title
        ));
        Ok(())
    }

    /// Remove every book with the given title.
    ///
    /// The confirmation is emitted whether or not anything matched.
    pub fn remove_book(&mut self, title: &str) -> anyhow::Result<()> {
        self.catalog.remove(title)?;
        self.confirm(&format!(
            "Book with name \"{}\" was removed successfully",
            title
        ));
        Ok(())
    }

    /// Show the catalog, or the empty notice when there is nothing in it.
    ///
    /// Listing output is data, not chatter, so quiet mode does not suppress it.
    pub fn show_books(&self) -> anyhow::Result<()> {
        let books = self.catalog.list()?;
        if self.ui.mode.is_json() {
            return output::print_book_list(&self.ui, &books);
        }
        if books.is_empty() {
            render::print(&self.ui, "Library is empty.");
            return Ok(());
        }
        output::print_book_list(&self.ui, &books)
    }

    fn confirm(&self, message: &str) {
        if !self.quiet {
            render::notice(&self.ui, Badge::Ok, message);
        }
    }
}
