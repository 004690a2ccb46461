//! Bounded interactive input: each getter keeps asking until the answer is
//! acceptable and only returns early when the input stream ends.

use std::io::{BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub(super) enum PromptError {
    #[error("input stream closed before a valid value was entered")]
    EndOfInput,
    #[error("failed to access the terminal")]
    Io(#[from] std::io::Error),
}

pub(super) struct BoundedPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BoundedPrompt<R, W> {
    pub(super) fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub(super) fn say(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    pub(super) fn get_float(&mut self, min: f64, max: f64, prompt: &str) -> Result<f64, PromptError> {
        loop {
            let token = self.read_token(prompt)?;
            if let Ok(value) = token.parse::<f64>() {
                if min <= value && value <= max {
                    return Ok(value);
                }
            }
            tracing::warn!(input = %token, min, max, "rejected float input");
            writeln!(self.writer, "{token} n'est pas un nombre entre {min} et {max}")?;
        }
    }

    pub(super) fn get_int(&mut self, min: i64, max: i64, prompt: &str) -> Result<i64, PromptError> {
        loop {
            let token = self.read_token(prompt)?;
            if let Ok(value) = token.parse::<i64>() {
                if min <= value && value <= max {
                    return Ok(value);
                }
            }
            tracing::warn!(input = %token, min, max, "rejected integer input");
            writeln!(
                self.writer,
                "{token} n'est pas un nombre entier entre {min} et {max}"
            )?;
        }
    }

    pub(super) fn get_choice<'a, T>(
        &mut self,
        options: &'a [T],
        key: impl Fn(&T) -> &str,
        prompt: &str,
    ) -> Result<&'a T, PromptError> {
        loop {
            let token = self.read_token(prompt)?;
            if let Some(choice) = options.iter().find(|option| key(option) == token) {
                return Ok(choice);
            }
            tracing::warn!(input = %token, "rejected choice");
            let listed = options
                .iter()
                .map(|option| key(option))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(self.writer, "{token} n'est pas dans la liste : {listed}")?;
        }
    }

    fn read_token(&mut self, prompt: &str) -> Result<String, PromptError> {
        if !prompt.is_empty() {
            write!(self.writer, "{prompt}")?;
        }
        self.writer.flush()?;

        // Undecodable bytes become U+FFFD so the token is rejected like any other.
        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    #[cfg(test)]
    pub(super) fn into_writer(self) -> W {
        self.writer
    }
}
