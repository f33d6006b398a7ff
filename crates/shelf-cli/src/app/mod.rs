//! Application context for the Shelf CLI.

use crate::cli::Cli;
use crate::ui::UiContext;

/// Bundles CLI flags so handlers take one parameter instead of several.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build the terminal context from flags and environment.
    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(
            self.cli.json,
            self.cli.format.as_deref(),
            self.cli.no_color,
            self.cli.ascii,
        )
    }
}
