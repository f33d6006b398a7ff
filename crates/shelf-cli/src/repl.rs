//! The interactive command loop.
//!
//! One line of input per iteration: trimmed, lower-cased, and dispatched to
//! the facade. Unknown commands are reported and the loop continues; `exit`
//! or end of input stops it.

use shelf_core::{MemoryCatalog, ShelfError};

use crate::app::AppContext;
use crate::commands;
use crate::helpers::Prompter;
use crate::library::Library;
use crate::ui::{render, Badge};

const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit)";

/// What a command handler tells the loop to do next.
pub enum Flow {
    Continue,
    Quit,
}

/// A recognized loop command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Add,
    Remove,
    Show,
    Exit,
}

impl ReplCommand {
    /// Interpret one line of input. Matching is case-insensitive and ignores
    /// surrounding whitespace; anything unrecognized is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "show" => Some(Self::Show),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context();
    let prompter = Prompter::from_env();
    let mut library = Library::new(Box::new(MemoryCatalog::new()), ui.clone(), ctx.quiet());

    if prompter.is_interactive() && ui.mode.is_pretty() && !ctx.quiet() {
        render::print(&ui, &render::header(&ui, "interactive catalog"));
        render::print(&ui, &render::hint(&ui, "add \u{00B7} remove \u{00B7} show \u{00B7} exit"));
        render::print(&ui, &render::divider(&ui));
    }

    loop {
        let Some(line) = prompter.line(COMMAND_PROMPT)? else {
            break;
        };

        match ReplCommand::parse(&line) {
            Some(ReplCommand::Add) => {
                match commands::add::handle_add(&mut library, &prompter) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(err) => {
                        // Malformed year input rejects the command, not the session.
                        let year_hint = err
                            .downcast_ref::<ShelfError>()
                            .filter(|e| matches!(e, ShelfError::InvalidInput(_)))
                            .map(|_| "enter a whole number, e.g. 1965");
                        render::print_error(&ui, &format!("{:#}", err), year_hint);
                    }
                }
            }
            Some(ReplCommand::Remove) => {
                match commands::remove::handle_remove(&mut library, &prompter)? {
                    Flow::Continue => {}
                    Flow::Quit => break,
                }
            }
            Some(ReplCommand::Show) => commands::show::handle_show(&library)?,
            Some(ReplCommand::Exit) => break,
            None => render::notice(&ui, Badge::Warn, "Invalid command. Please try again."),
        }
    }

    Ok(())
}
