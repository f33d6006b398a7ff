//! Add command handler: prompt for the book fields, then delegate.

use crate::helpers::Prompter;
use crate::library::Library;
use crate::repl::Flow;

pub fn handle_add(library: &mut Library, prompter: &Prompter) -> anyhow::Result<Flow> {
    let Some(title) = prompter.line("Enter book title")? else {
        return Ok(Flow::Quit);
    };
    let Some(author) = prompter.line("Enter book author")? else {
        return Ok(Flow::Quit);
    };
    let Some(year) = prompter.year("Enter book year")? else {
        return Ok(Flow::Quit);
    };

    library.add_book(&title, &author, year)?;
    Ok(Flow::Continue)
}
