//! UI primitives for the Shelf CLI.
//!
//! - **Context**: TTY detection, color, width, and output mode resolution
//! - **Theme**: Badge tokens and ANSI styles
//! - **Render**: Badges, notices, headers, hints, tables

mod context;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use render::Column;
pub use theme::Badge;
