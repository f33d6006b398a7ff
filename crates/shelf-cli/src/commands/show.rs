//! Show command handler.

use crate::library::Library;

pub fn handle_show(library: &Library) -> anyhow::Result<()> {
    library.show_books()
}
