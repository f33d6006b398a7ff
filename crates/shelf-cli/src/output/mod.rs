//! Output formatting for book listings.
//!
//! The plain rendering (one `Display` line per book, insertion order) is the
//! normative one; the pretty table and the JSON array are views over the
//! same data.

use shelf_core::Book;

use crate::ui::{render, Column, OutputMode, UiContext};

const LIST_COLUMNS: [Column; 3] = [
    Column::new("Title"),
    Column::new("Author"),
    Column::new("Year"),
];

/// Table rows for the pretty listing.
pub fn book_rows(books: &[Book]) -> Vec<Vec<String>> {
    books
        .iter()
        .map(|book| {
            vec![
                book.title.clone(),
                book.author.clone(),
                book.year.to_string(),
            ]
        })
        .collect()
}

/// Print the books in the resolved output mode.
pub fn print_book_list(ctx: &UiContext, books: &[Book]) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(books)?);
        }
        OutputMode::Pretty => {
            println!("{}", render::simple_table(ctx, &LIST_COLUMNS, &book_rows(books)));
        }
        OutputMode::Plain => {
            for book in books {
                println!("{}", book);
            }
        }
    }
    Ok(())
}
