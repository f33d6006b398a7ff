//! Remove command handler.

use crate::helpers::Prompter;
use crate::library::Library;
use crate::repl::Flow;

pub fn handle_remove(library: &mut Library, prompter: &Prompter) -> anyhow::Result<Flow> {
    let Some(title) = prompter.line("Enter book title to remove")? else {
        return Ok(Flow::Quit);
    };

    library.remove_book(&title)?;
    Ok(Flow::Continue)
}
