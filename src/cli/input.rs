use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("sequence length must be a positive integer, got {0:?}")]
    InvalidLength(String),

    #[error("ID may only contain letters, digits, '_', '.' and '-', got {0:?}")]
    InvalidId(String),

    #[error("no value given for {0}")]
    MissingInput(&'static str),

    #[error("failed to read {field}: {source}")]
    Io {
        field: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Run identifier, also used as the stem of both output file names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SeqId(String);

impl SeqId {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let id = raw.trim();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));
        if valid {
            Ok(SeqId(id.to_string()))
        } else {
            Err(InputError::InvalidId(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_length(raw: &str) -> Result<usize, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n > 0 => {
            usize::try_from(n).map_err(|_| InputError::InvalidLength(trimmed.to_string()))
        }
        _ => Err(InputError::InvalidLength(trimmed.to_string())),
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompter<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Returns `preset` when given, otherwise prints `prompt` and reads one
    /// trimmed line.
    pub fn ask(
        &mut self,
        field: &'static str,
        prompt: &str,
        preset: Option<String>,
    ) -> Result<String, InputError> {
        if let Some(value) = preset {
            return Ok(value.trim().to_string());
        }
        let io_err = |source: io::Error| InputError::Io { field, source };
        write!(self.output, "{}", prompt).map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line).map_err(io_err)?;
        if n == 0 {
            return Err(InputError::MissingInput(field));
        }
        Ok(line.trim().to_string())
    }
}
