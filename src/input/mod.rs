use std::io::Write;

use crate::error::ShellError;

mod editor;
mod reader;

pub use editor::EditorSource;
pub use reader::ReaderSource;

/// One attempt to read a command line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is dropped.
    Interrupted,
    Eof,
}

/// Where the read loop gets its lines from.
pub trait LineSource {
    /// Shows `prompt` and blocks for one line, without its line terminator.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError>;
}
