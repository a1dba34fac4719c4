//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use crate::error::{FieldError, PlannerError, Result};

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show `prompt` and return the answer without its line ending
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // raw bytes so a non-UTF-8 line is just another rejected answer
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PlannerError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer, printing its error each time it
    /// does not
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, FieldError>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("Rejected answer {:?} for {:?}: {:?}", answer, prompt.trim(), err);
                    self.say(&err.to_string())?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
