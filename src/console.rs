//! Console input and output.
//!
//! The session only talks to a [`Console`], so the menu loop can run against
//! scripted input in tests as well as against a terminal.

use std::io::{self, BufRead, Write};

/// Line-based text input and output.
pub trait Console {
    /// Reads one line with surrounding whitespace trimmed.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying reader.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes `text` as-is and flushes it.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    fn write_str(&mut self, text: &str) -> io::Result<()>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct IoConsole<R, W> {
    input: R,
    output: W,
}

impl<R, W> IoConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl IoConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_trimmed_lines_until_eof() {
        let mut console = IoConsole::new(Cursor::new(" 1 \r\n2\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn writes_text_verbatim() {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        console.write_str("Choose an option: ").unwrap();
        assert_eq!(console.output().as_slice(), b"Choose an option: ");
    }
}
