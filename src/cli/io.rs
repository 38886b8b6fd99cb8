use std::io::{self, BufRead, Write};

use crate::errors::StoreError;

/// Line-based console input with prompt rendering.
///
/// The input source is injected so tests can script a whole menu session
/// from a `Cursor`. Prompts go to stdout and are flushed before each read.
pub struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Reads one line, stripped of its trailing terminator. `None` means
    /// end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, StoreError> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Like [`Console::read_line`], but treats end of input as an error.
    /// Used inside multi-prompt flows where a half-entered record must
    /// abort instead of hanging.
    pub fn required_line(&mut self, prompt: &str) -> Result<String, StoreError> {
        self.read_line(prompt)?.ok_or_else(|| {
            StoreError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            ))
        })
    }

    /// Prompts for a 1-based menu number.
    pub fn prompt_menu_number(&mut self, prompt: &str) -> Result<u32, StoreError> {
        let line = self.required_line(prompt)?;
        line.trim()
            .parse::<u32>()
            .map_err(|_| StoreError::invalid("number", line.trim()))
    }

    /// Prompts for a decimal amount. Non-finite values are rejected; a NaN
    /// amount would poison summary totals and never round-trip equal.
    pub fn prompt_amount(&mut self, prompt: &str) -> Result<f64, StoreError> {
        let line = self.required_line(prompt)?;
        let value = line
            .trim()
            .parse::<f64>()
            .map_err(|_| StoreError::invalid("amount", line.trim()))?;
        if !value.is_finite() {
            return Err(StoreError::invalid("amount", line.trim()));
        }
        Ok(value)
    }

    /// Prompts for y/n confirmation; anything other than `y`/`Y` declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, StoreError> {
        let line = self.required_line(prompt)?;
        Ok(matches!(line.trim(), "y" | "Y"))
    }

    /// Prompts for an optional value: an empty entry means "keep current".
    pub fn prompt_optional(&mut self, prompt: &str) -> Result<Option<String>, StoreError> {
        let line = self.required_line(prompt)?;
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

/// Console reading from the process stdin.
pub fn stdin_console() -> Console<io::StdinLock<'static>> {
    Console::new(io::stdin().lock())
}
