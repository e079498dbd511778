//! Sink wrapper: a byte destination paired with its line format

use super::error::Result;
use super::output_format::OutputFormat;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;

/// A destination plus the format every line written to it is rendered in.
///
/// The mutex serializes callers that write to the same destination from
/// different threads in blocking mode, so lines never interleave. In
/// non-blocking mode the drain worker is the only writer and the lock is
/// never contended.
pub struct Sink {
    destination: Mutex<Box<dyn Write + Send>>,
    format: OutputFormat,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(destination: W, format: OutputFormat) -> Self {
        Self {
            destination: Mutex::new(Box::new(destination)),
            format,
        }
    }

    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }

    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write one rendered line, adding the terminator if it is missing.
    ///
    /// Line and terminator go out in a single `write_all` under the lock.
    /// The destination is not flushed; the engine calls [`flush`](Self::flush)
    /// after each blocking delivery and whenever the queue runs empty.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line.as_bytes());
        if !line.ends_with('\n') {
            buf.push(b'\n');
        }

        self.destination.lock().write_all(&buf)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.destination.lock().flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("format", &self.format).finish()
    }
}
