//! Badge tokens and ANSI styling.

/// ANSI escape codes used by the theme.
mod codes {
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Status badge for notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Badge token for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match self {
            Self::Ok => {
                if unicode {
                    "[\u{2713}]" // [✓]
                } else {
                    "[OK]"
                }
            }
            Self::Warn => {
                if unicode {
                    "[\u{26A0}]" // [⚠]
                } else {
                    "[WARN]"
                }
            }
            Self::Err => {
                if unicode {
                    "[\u{2717}]" // [✗]
                } else {
                    "[ERR]"
                }
            }
        }
    }

    /// Color applied to the badge token.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => Style(codes::GREEN),
            Self::Warn => Style(codes::YELLOW),
            Self::Err => Style(codes::RED),
        }
    }
}

/// An ANSI style prefix, applied by [`styled`].
#[derive(Debug, Clone, Copy)]
pub struct Style(&'static str);

/// Common text styles.
pub mod styles {
    use super::{codes, Style};

    pub const fn dim() -> Style {
        Style(codes::DIM)
    }

    pub const fn bold() -> Style {
        Style(codes::BOLD)
    }
}

/// Wrap `text` in the style's escape codes when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        format!("{}{}{}", style.0, text, codes::RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Warn.display(false), "[WARN]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_plain_when_color_disabled() {
        assert_eq!(styled("text", styles::bold(), false), "text");
    }

    #[test]
    fn test_styled_wraps_with_reset() {
        let out = styled("text", styles::dim(), true);
        assert!(out.starts_with("\x1b[2m"));
        assert!(out.ends_with("\x1b[0m"));
    }
}
