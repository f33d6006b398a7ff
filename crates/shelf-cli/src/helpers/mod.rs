//! Input and parsing helpers for the command loop.

pub mod input;
mod parsing;

pub use input::Prompter;
pub use parsing::{parse_year, validate_output_format};
