use crate::utils::error::{BankError, Result};
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

/// Line-oriented prompts that keep asking until the answer parses.
///
/// End of input surfaces as an `IoError` of kind `UnexpectedEof`.
pub struct Prompter<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Prompter<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes pre-formatted text as is.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::IoError(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(line.trim().to_string())
    }

    fn read_parsed<T: FromStr>(&mut self, prompt: &str, complaint: &str) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(complaint)?,
            }
        }
    }

    pub fn read_int<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        self.read_parsed(prompt, "Invalid input. Please enter an integer.")
    }

    pub fn read_number(&mut self, prompt: &str) -> Result<f64> {
        self.read_parsed(prompt, "Invalid input. Please enter a number.")
    }

    pub fn read_bool(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let line = self.read_line(prompt)?.to_lowercase();
            match line.as_str() {
                "true" => return Ok(true),
                "false" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'true' or 'false'.")?,
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
