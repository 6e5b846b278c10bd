use super::LogSink;
use crate::line_mode::LineMode;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Sink that streams records into an [`io::Write`] implementor.
///
/// The writer sits behind a [`Mutex`] so that concurrent log statements never
/// interleave within a record. Records that do not end with a newline are
/// terminated according to the sink's [`LineMode`] (by default
/// [`LineMode::WithNewline`]). With
/// [`set_flush_each_record`](Self::set_flush_each_record) enabled the writer
/// is flushed after every record, so buffered writers never hold output that
/// the process could exit without delivering.
///
/// # Examples
///
/// ```
/// use logging_sink::{LineMode, LogSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write(b"phase one\n")?;
/// sink.write(b"phase two")?;
/// assert_eq!(sink.into_inner(), b"phase one\nphase two\n".to_vec());
///
/// let raw = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// raw.write(b"no terminator")?;
/// assert_eq!(raw.into_inner(), b"no terminator".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
    flush_each_record: bool,
}

impl<W> WriterSink<W> {
    /// Creates a sink that terminates unterminated records with a newline.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
            flush_each_record: false,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Reports whether the writer is flushed after every record.
    #[must_use]
    pub const fn flushes_each_record(&self) -> bool {
        self.flush_each_record
    }

    /// Flush the writer after every record instead of only on
    /// [`LogSink::flush`].
    pub fn set_flush_each_record(&mut self, value: bool) {
        self.flush_each_record = value;
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        self.writer
            .get_mut()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl WriterSink<io::Stderr> {
    /// Sink writing to the process's standard error stream.
    ///
    /// This is the default destination of a freshly created logger.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriterSink<io::Stdout> {
    /// Sink writing to the process's standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<BufWriter<File>> {
    /// Opens `path` for appending, creating it when missing.
    ///
    /// Each record, newline included, is assembled in the buffer and flushed
    /// to the file before [`LogSink::write`] returns. The process-wide logger
    /// is never dropped, so nothing may be left waiting in the buffer at exit.
    pub fn append_to_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut sink = Self::new(BufWriter::new(file));
        sink.set_flush_each_record(true);
        Ok(sink)
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self.lock();
        writer.write_all(bytes)?;
        if self.line_mode.needs_terminator(bytes) {
            writer.write_all(b"\n")?;
        }
        if self.flush_each_record {
            writer.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}
