//! Shelf CLI - an interactive, in-memory book catalog.
//!
//! Running `shelf` with no subcommand enters the command loop. The catalog
//! lives only for the duration of the session; nothing is persisted.

mod app;
mod cli;
mod commands;
mod helpers;
mod library;
mod output;
mod repl;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json && cli.format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    helpers::validate_output_format(cli.format.as_deref())?;

    match cli.command {
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args.shell),
        None => {
            let ctx = AppContext::new(&cli);
            repl::run(&ctx)
        }
    }
}
