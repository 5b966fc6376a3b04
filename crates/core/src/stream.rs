//! Input, output and error streams commands talk through.
//!
//! A [`Stream`] is owned by the application and lent to each command, so
//! tests can swap the process streams for in-memory buffers. Writing the same
//! line several times in a row prints it once, followed by a [`REPEAT_CHAR`]
//! per repetition.

use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;
use std::str::FromStr;

use log::trace;

use crate::error::{Error, Result};

/// Written in place of a line identical to the one before it.
pub const REPEAT_CHAR: &str = "⟲";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamName {
    In,
    Out,
    Error,
}

impl FromStr for StreamName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "error" => Ok(Self::Error),
            _ => Err(Error::InvalidStreamName(name.to_string())),
        }
    }
}

impl Display for StreamName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamName::In => formatter.write_str("in"),
            StreamName::Out => formatter.write_str("out"),
            StreamName::Error => formatter.write_str("error"),
        }
    }
}

pub struct Stream {
    input: Box<dyn BufRead>,
    out: Box<dyn Write>,
    error: Box<dyn Write>,
    last_line: String,
    last_line_repeats: bool,
}

impl Stream {
    pub fn new(
        input: impl BufRead + 'static,
        out: impl Write + 'static,
        error: impl Write + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            out: Box::new(out),
            error: Box::new(error),
            last_line: String::new(),
            last_line_repeats: false,
        }
    }

    /// Streams bound to the process's stdin, stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), io::stderr())
    }

    /// Writes `message` as is. Writing to [`StreamName::In`] does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write(&mut self, message: &str, stream_name: StreamName) -> Result<()> {
        let writer = match stream_name {
            StreamName::In => {
                trace!("Ignoring write to input stream: {message:?}");
                return Ok(());
            }
            StreamName::Out => &mut self.out,
            StreamName::Error => &mut self.error,
        };

        writer.write_all(message.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Writes `message` by stream name, as given in configuration or scripts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStreamName`] for names other than `in`, `out`
    /// and `error`.
    pub fn write_named(&mut self, message: &str, stream_name: &str) -> Result<()> {
        let stream_name = stream_name.parse()?;
        self.write(message, stream_name)
    }

    /// Writes `message` followed by a newline, collapsing consecutive
    /// repetitions of the same line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_line(&mut self, message: &str, stream_name: StreamName) -> Result<()> {
        let line = format!("{message}\n");

        if line == self.last_line {
            self.write(REPEAT_CHAR, stream_name)?;
            self.last_line_repeats = true;
        } else {
            if self.last_line_repeats {
                self.write("\n", stream_name)?;
            }

            self.write(&line, stream_name)?;
            self.last_line_repeats = false;
        }

        self.last_line = line;
        Ok(())
    }

    /// Reads one line from the input stream, including its line ending.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }

    /// Asks for a value on the output stream and reads the answer.
    ///
    /// Returns the trimmed answer, or `default` (or an empty string) when the
    /// answer is blank.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the answer fails.
    pub fn prompt(&mut self, default: Option<&str>) -> Result<String> {
        let prefix = default.map(|default| format!("[{default}]")).unwrap_or_default();
        self.write(&format!("{prefix} > "), StreamName::Out)?;

        let answer = self.read_line()?;
        let answer = answer.trim();

        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }

        Ok(answer.to_string())
    }
}

/// A cloneable in-memory writer; every clone appends to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
