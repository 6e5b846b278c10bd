//! crates/logging/src/entry.rs
//! Per-statement message buffer delivered to its logger on drop.

use crate::location::SourceLocation;
use crate::logger::Logger;
use crate::severity::Severity;
use std::fmt;
use std::io;

/// A log record under construction.
///
/// An entry is created for one log statement, accumulates the message text,
/// and hands itself to [`Logger::output`] exactly once when dropped. Dropping
/// happens at the end of the statement for the call-site macros, or during
/// unwinding if formatting panics, so a constructed entry is always emitted.
/// The borrow of the parent logger keeps entries from being stored past the
/// statement that created them.
///
/// When the logger needs extended info at construction time the buffer starts
/// with a metadata header (`"{tag} [{SEVERITY}] {file}:{line} {module}: "`);
/// [`regular_message_start_offset`](Self::regular_message_start_offset)
/// marks where caller-supplied text begins.
///
/// # Examples
///
/// ```
/// use logging::{Logger, MemorySink, Severity};
///
/// let logger = Logger::new();
/// let low = MemorySink::new();
/// logger.reset_backend(low.clone(), MemorySink::new());
///
/// logger
///     .entry(Severity::Error, "ERROR", logging::source_location!())
///     .append("tree ")
///     .append(&3)
///     .append_str(" failed\n");
///
/// assert_eq!(low.contents_lossy(), "tree 3 failed\n");
/// ```
pub struct LogEntry<'a> {
    parent: &'a Logger,
    buffer: Vec<u8>,
    regular_message_start_offset: usize,
    location: SourceLocation,
    tag: &'static str,
    severity: Severity,
}

impl<'a> LogEntry<'a> {
    /// Starts an entry that will be delivered to `parent`.
    ///
    /// Construction does not consult the severity filter; callers that want
    /// filtering check [`Logger::fast_log_filter`] first, as the macros do.
    pub fn new(
        parent: &'a Logger,
        location: SourceLocation,
        tag: &'static str,
        severity: Severity,
    ) -> Self {
        let mut buffer = Vec::new();
        if parent.need_extended_info() {
            write_header(&mut buffer, tag, severity, &location);
        }
        let regular_message_start_offset = buffer.len();

        Self {
            parent,
            buffer,
            regular_message_start_offset,
            location,
            tag,
            severity,
        }
    }

    /// Appends the [`Display`](fmt::Display) rendering of `value`.
    pub fn append<T>(&mut self, value: &T) -> &mut Self
    where
        T: fmt::Display + ?Sized,
    {
        self.write_fmt(format_args!("{value}"));
        self
    }

    /// Appends a string slice.
    pub fn append_str(&mut self, text: &str) -> &mut Self {
        self.buffer.extend_from_slice(text.as_bytes());
        self
    }

    /// Appends raw bytes.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    /// Appends formatted arguments.
    ///
    /// Being an inherent method, this is what `write!(entry, ...)` resolves
    /// to regardless of which `Write` traits are in scope.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a Vec only fails when a Display impl reports an error;
        // whatever was produced up to that point is kept.
        let _ = io::Write::write_fmt(&mut self.buffer, args);
    }

    /// Appends formatted arguments followed by a newline.
    pub fn write_line(&mut self, args: fmt::Arguments<'_>) {
        self.write_fmt(args);
        self.buffer.push(b'\n');
    }

    /// The whole buffer, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// The metadata header, empty when none was written.
    pub fn header(&self) -> &[u8] {
        &self.buffer[..self.regular_message_start_offset]
    }

    /// Caller-supplied text only.
    pub fn payload(&self) -> &[u8] {
        &self.buffer[self.regular_message_start_offset..]
    }

    /// Offset of the first payload byte within [`as_bytes`](Self::as_bytes).
    pub const fn regular_message_start_offset(&self) -> usize {
        self.regular_message_start_offset
    }

    /// Severity the entry was created with.
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Call-site label, e.g. `"WARNING"` or `"CRITICAL_INFO"`.
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// Where the entry was created.
    pub const fn location(&self) -> SourceLocation {
        self.location
    }
}

impl Drop for LogEntry<'_> {
    fn drop(&mut self) {
        self.parent.output(self);
    }
}

impl fmt::Write for LogEntry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl io::Write for LogEntry<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("severity", &self.severity)
            .field("tag", &self.tag)
            .field("location", &self.location)
            .field("payload", &String::from_utf8_lossy(self.payload()))
            .finish_non_exhaustive()
    }
}

fn write_header(
    buffer: &mut Vec<u8>,
    tag: &'static str,
    severity: Severity,
    location: &SourceLocation,
) {
    let _ = io::Write::write_fmt(buffer, format_args!("{tag} [{severity}] {location}: "));
}
