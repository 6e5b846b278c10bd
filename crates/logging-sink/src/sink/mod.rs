mod callback;
mod memory;
mod null;
mod writer;

use std::io;
use std::sync::Arc;

pub use callback::{CustomLoggingFunction, FnSink};
pub use memory::MemorySink;
pub use null::NullSink;
pub use writer::WriterSink;

/// Destination capable of accepting finished log records.
///
/// Implementors receive one record per [`write`](Self::write) call. The
/// record is the complete byte sequence produced for a single log statement
/// (optionally preceded by its metadata header). Implementations synchronise
/// internally because the logger shares sinks between threads through `&self`.
///
/// # Examples
///
/// A sink that counts bytes:
///
/// ```
/// use std::io;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use logging_sink::LogSink;
///
/// #[derive(Default)]
/// struct ByteCounter(AtomicUsize);
///
/// impl LogSink for ByteCounter {
///     fn write(&self, bytes: &[u8]) -> io::Result<()> {
///         self.0.fetch_add(bytes.len(), Ordering::Relaxed);
///         Ok(())
///     }
/// }
///
/// let counter = ByteCounter::default();
/// counter.write(b"hello").unwrap();
/// assert_eq!(counter.0.load(Ordering::Relaxed), 5);
/// ```
pub trait LogSink: Send + Sync {
    /// Writes a single record.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;

    /// Commits any buffered output.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> LogSink for Box<S>
where
    S: LogSink + ?Sized,
{
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> LogSink for Arc<S>
where
    S: LogSink + ?Sized,
{
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> LogSink for &'static S
where
    S: LogSink + ?Sized,
{
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
