// input.rs
use crate::error::GameError;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, Write};

lazy_static! {
    static ref LEADING_INT: Regex = Regex::new(r"^\s*([+-]?\d+)").expect("valid regex");
}

/// Supplies validated values to the game loop.
pub trait InputProvider {
    /// Asks until the answer is an integer within `min..=max`.
    fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, GameError>;
    /// Asks until the answer is non-empty; the answer is trimmed and cut to `max_len` characters.
    fn read_text(&mut self, prompt: &str, max_len: usize) -> Result<String, GameError>;
}

/// Line-based input over any reader, echoing prompts and complaints to `output`.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}

/// Parses the integer a line starts with, ignoring anything after it.
pub fn parse_leading_int(line: &str) -> Option<i64> {
    LEADING_INT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, GameError> {
        loop {
            let line = self.read_line(prompt)?;
            match parse_leading_int(&line) {
                None => writeln!(self.output, "Invalid input. Try again.")?,
                Some(value) if value < min || value > max => writeln!(
                    self.output,
                    "Value out of range [{} - {}]. Try again.",
                    min, max
                )?,
                Some(value) => return Ok(value),
            }
        }
    }

    fn read_text(&mut self, prompt: &str, max_len: usize) -> Result<String, GameError> {
        loop {
            let line = self.read_line(prompt)?;
            let text: String = line.trim().chars().take(max_len).collect();
            if text.is_empty() {
                writeln!(self.output, "A value is required. Try again.")?;
                continue;
            }
            return Ok(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(text: &str) -> ConsoleInput<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleInput::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn leading_integer_rules() {
        assert_eq!(parse_leading_int("12\n"), Some(12));
        assert_eq!(parse_leading_int("  7abc"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    #[test]
    fn read_int_reprompts_until_valid() {
        let mut input = console("abc\n9\n2\n");
        assert_eq!(input.read_int("Index: ", 0, 3).unwrap(), 2);

        let output = String::from_utf8(input.into_output()).unwrap();
        assert_eq!(output.matches("Index: ").count(), 3);
        assert!(output.contains("Invalid input"));
        assert!(output.contains("Value out of range [0 - 3]"));
    }

    #[test]
    fn read_int_fails_on_end_of_input() {
        let mut input = console("x\n");
        assert!(matches!(
            input.read_int("Index: ", 0, 3),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn read_text_trims_and_truncates() {
        let mut input = console("\n  Terra do Fogo Ocidental e Oriental  \n");
        let text = input.read_text("Name: ", 10).unwrap();
        assert_eq!(text, "Terra do F");
    }
}
