//! Line input for the command loop.
//!
//! On a TTY, prompts go through dialoguer. With piped input, lines are read
//! silently from stdin so scripted sessions see only the program's output.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use super::parsing::parse_year;

/// Reads user input, prompting only when stdin is a terminal.
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn from_env() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Read one line of input, trimmed. Returns `None` at end of input.
    pub fn line(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.interactive {
            let value: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
            Ok(Some(value.trim().to_string()))
        } else {
            let mut buffer = String::new();
            let read = io::stdin().lock().read_line(&mut buffer)?;
            if read == 0 {
                return Ok(None);
            }
            Ok(Some(buffer.trim().to_string()))
        }
    }

    /// Read a year. The interactive prompt re-asks until the input parses;
    /// piped input gets one line and a hard error on a malformed value.
    pub fn year(&self, prompt: &str) -> anyhow::Result<Option<i32>> {
        if self.interactive {
            let value: i32 = Input::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
            Ok(Some(value))
        } else {
            match self.line(prompt)? {
                Some(raw) => Ok(Some(parse_year(&raw)?)),
                None => Ok(None),
            }
        }
    }
}
