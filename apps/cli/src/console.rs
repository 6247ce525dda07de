//! # Console
//!
//! Line-oriented terminal I/O over any `BufRead` / `Write` pair.
//!
//! Production wires it to locked stdin/stdout; tests feed a `Cursor` script
//! and capture output in a `Vec<u8>`.
//!
//! ## Input Rules
//! - One line per prompt; the trailing `\n` / `\r\n` is dropped
//! - End of input → [`ErrorCode::InputClosed`](crate::error::ErrorCode)
//! - Numeric prompts return `None` on anything that does not parse

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::error::{AppError, AppResult};

pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            interactive: true,
        }
    }

    /// Turns screen clearing and "press Enter" pauses on or off.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Upper-cased screen title between blank lines.
    pub fn heading(&mut self, title: &str) -> AppResult<()> {
        self.blank()?;
        self.say(title)?;
        self.blank()
    }

    /// Clears the screen and homes the cursor. Skipped when not interactive.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.interactive {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Waits for Enter. Skipped when not interactive.
    pub fn pause(&mut self) -> AppResult<()> {
        if !self.interactive {
            return Ok(());
        }
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Reads one raw line without its line terminator.
    pub fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::input_closed());
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prints `label` without a newline and reads the whole answer line.
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like [`prompt`](Self::prompt) but trimmed, for single-token answers.
    pub fn prompt_token(&mut self, label: &str) -> AppResult<String> {
        Ok(self.prompt(label)?.trim().to_string())
    }

    /// `None` when the answer is not a `T`.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> AppResult<Option<T>> {
        Ok(self.prompt_token(label)?.parse().ok())
    }

    /// Loops until the answer is `Y` or `N` (any case).
    pub fn prompt_yes_no(&mut self, label: &str) -> AppResult<bool> {
        loop {
            match self.prompt_token(label)?.to_ascii_uppercase().as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'Y' or 'N' only.")?,
            }
        }
    }

    /// `true` only when the answer starts with `Y`/`y`; anything else stops.
    pub fn prompt_continue(&mut self, label: &str) -> AppResult<bool> {
        let answer = self.prompt_token(label)?;
        Ok(answer.starts_with(|c: char| c.eq_ignore_ascii_case(&'y')))
    }
}
