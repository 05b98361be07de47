use std::io::{BufRead, Write};

use crate::core::Result;

/// Source of console input for a [`Session`](super::Session).
pub trait LineReader {
    /// Shows `prompt` and blocks for one line of input. The returned line
    /// has no terminator. `None` means the input ended or was interrupted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads lines from any buffered reader, echoing prompts to `prompt_out`.
/// Serves piped stdin and scripted input.
pub struct BufLineReader<R, W> {
    input       : R,
    prompt_out  : W,
}

impl<R: BufRead, W: Write> BufLineReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
        }
    }
}

impl<R: BufRead, W: Write> LineReader for BufLineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
