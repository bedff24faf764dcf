use std::io::{BufRead, Write};

use super::{LineSource, ReadOutcome};
use crate::error::ShellError;

/// Reads lines from any buffered reader, writing the prompt to the output.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<ReadOutcome, ShellError> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(ReadOutcome::Eof);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadOutcome::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_then_eof() {
        let mut source = ReaderSource::new(Cursor::new("ls -l\r\npwd"));
        let mut out = Vec::new();

        assert_eq!(
            source.read_line("> ", &mut out).unwrap(),
            ReadOutcome::Line("ls -l".to_string())
        );
        assert_eq!(
            source.read_line("> ", &mut out).unwrap(),
            ReadOutcome::Line("pwd".to_string())
        );
        assert_eq!(source.read_line("> ", &mut out).unwrap(), ReadOutcome::Eof);
        assert_eq!(out, b"> > > ");
    }

    #[test]
    fn test_blank_line_is_a_line() {
        let mut source = ReaderSource::new(Cursor::new("\n"));
        let mut out = Vec::new();
        assert_eq!(
            source.read_line("", &mut out).unwrap(),
            ReadOutcome::Line(String::new())
        );
    }
}
