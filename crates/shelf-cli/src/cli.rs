use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use shelf_core::VERSION;

/// Shelf - an interactive, in-memory book catalog
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (suppress confirmations)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output listings as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII status badges instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}
