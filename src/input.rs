use crate::errors::ClipboardError;
use std::io::{self, BufRead, BufReader, Read, Stdin, Stdout, Write};
use tracing::trace;

pub const PATH_PROMPT: &str = "📁 Enter folder or file path(s): ";

/// Where path text comes from when none was given on the command line.
pub trait InputSource {
    fn read_paths(&mut self) -> Result<String, ClipboardError>;
}

/// Asks on a terminal and reads one line back.
pub struct PromptInput<R, W> {
    reader: R,
    writer: W,
}

impl PromptInput<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        PromptInput::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        PromptInput { reader, writer }
    }

    /// Prints `prompt` and returns the trimmed answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ClipboardError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| ClipboardError::InputError(e.to_string()))?;
        if read == 0 {
            return Err(ClipboardError::InputError("input closed".to_string()));
        }
        trace!("Prompt answer: {:?}", line);
        Ok(line.trim().to_string())
    }

    /// Yes/no question, defaulting to no.
    pub fn confirm(&mut self, question: &str) -> Result<bool, ClipboardError> {
        let answer = self.ask(&format!("{} [y/N] ", question))?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> InputSource for PromptInput<R, W> {
    fn read_paths(&mut self) -> Result<String, ClipboardError> {
        self.ask(PATH_PROMPT)
    }
}

/// Reads everything piped into the process.
pub struct StdinInput<R> {
    reader: R,
}

impl StdinInput<Stdin> {
    pub fn stdin() -> Self {
        StdinInput::new(io::stdin())
    }
}

impl<R: Read> StdinInput<R> {
    pub fn new(reader: R) -> Self {
        StdinInput { reader }
    }
}

impl<R: Read> InputSource for StdinInput<R> {
    fn read_paths(&mut self) -> Result<String, ClipboardError> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(|e| ClipboardError::InputError(e.to_string()))?;
        trace!("Read {} bytes of path text from stdin", text.len());
        Ok(text)
    }
}
