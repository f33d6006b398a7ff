//! Terminal context and output mode resolution.

use std::io::IsTerminal;

/// How listings and notices are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON listings; confirmations and notices suppressed
    Json,
    /// Stable line-per-book text for pipes and scripts
    #[default]
    Plain,
    /// Human-friendly tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve the mode from flags and environment.
    ///
    /// `--json` wins outright. `--format plain` and `TERM=dumb` force plain.
    /// Otherwise a TTY gets pretty and everything else plain.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format_flag == Some("plain") || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Terminal and environment facts the renderers need.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether ANSI styling is enabled
    pub color: bool,
    /// Whether Unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Build the context from CLI flags and the environment.
    ///
    /// Color is disabled by `--no-color`, the `NO_COLOR` environment
    /// variable, `TERM=dumb`, or a non-TTY stdout.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }
}

/// Terminal width from `COLUMNS` or the TTY itself.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ writes a winsize; we only read it on success
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_is_exclusive() {
        let mode = OutputMode::resolve(true, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_format_plain_forces_plain() {
        let mode = OutputMode::resolve(false, Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_dumb_terminal_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(false, None, true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_pipe_gets_plain() {
        let mode = OutputMode::resolve(false, None, false, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_format_table_on_tty_stays_pretty() {
        let mode = OutputMode::resolve(false, Some("table"), true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_ascii_flag_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, None, false, false);
        assert!(ctx.width > 0);
    }
}
