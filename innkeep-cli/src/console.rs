//! Line-oriented prompts with validation and retry.
//!
//! A [`Console`] writes a prompt, reads one line and re-prompts with an
//! error message until the answer is acceptable. Every reader returns
//! `Ok(None)` once input is exhausted so callers can end cleanly instead
//! of looping on a closed stream.

use innkeep::CostPerNight;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompting front end over any line reader and writer.
///
/// # Examples
///
/// ```
/// use innkeep_cli::console::Console;
/// use std::io::Cursor;
///
/// let mut console = Console::new(Cursor::new("\n  Smith \n"), Vec::new());
/// let surname = console.read_non_empty("Surname: ").unwrap();
/// assert_eq!(surname.as_deref(), Some("Smith"));
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts and messages go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Prompts once and returns the trimmed line, or `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a non-empty line is entered.
    pub fn read_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            self.say("Error: the value must not be empty. Try again.")?;
        }
    }

    /// Prompts until a cost in `(0, max]` is entered.
    pub fn read_cost(&mut self, prompt: &str, max: f64) -> io::Result<Option<CostPerNight>> {
        loop {
            let Some(line) = self.read_non_empty(prompt)? else {
                return Ok(None);
            };
            match parse_cost(&line, max) {
                Ok(cost) => return Ok(Some(cost)),
                Err(message) => self.say(format_args!("Error: {message}. Try again."))?,
            }
        }
    }

    /// Prompts until a whole number in `[low, high]` is entered.
    pub fn read_int_in_range(&mut self, prompt: &str, low: u32, high: u32) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.read_non_empty(prompt)? else {
                return Ok(None);
            };
            match parse_int_in_range(&line, low, high) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(format_args!("Error: {message}. Try again."))?,
            }
        }
    }
}

/// Parses a nightly cost typed by the operator.
///
/// # Errors
///
/// Returns a message for text that is not a number, or a number that is not
/// positive, not finite, or above `max`.
pub fn parse_cost(text: &str, max: f64) -> Result<CostPerNight, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| "enter a number".to_string())?;
    CostPerNight::with_ceiling(value, max).map_err(|e| e.message)
}

/// Parses a whole number in `[low, high]`.
///
/// Only ASCII digits are accepted, so signs, decimals and trailing text are
/// rejected rather than truncated.
///
/// # Errors
///
/// Returns a message for anything that is not all digits or is out of range.
pub fn parse_int_in_range(text: &str, low: u32, high: u32) -> Result<u32, String> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err("enter a whole number".to_string());
    }

    let out_of_range = || format!("enter a number in the range [{low}, {high}]");
    let value: u32 = text.parse().map_err(|_| out_of_range())?;
    if (low..=high).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range())
    }
}
