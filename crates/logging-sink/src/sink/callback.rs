use super::LogSink;
use std::fmt;
use std::io;

/// Plain function pointer accepted as a logging callback.
///
/// Embedders that capture log text rather than writing it to a stream can
/// pass a free function of this shape; any closure with the same signature
/// works as well through [`FnSink`].
pub type CustomLoggingFunction = fn(&[u8]);

/// Sink that hands every record to a callback.
///
/// The callback receives the record bytes and cannot fail; capturing hosts
/// usually copy the bytes into their own buffer or forward them to a foreign
/// logging API.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging_sink::{FnSink, LogSink};
///
/// let captured = Arc::new(Mutex::new(String::new()));
/// let target = Arc::clone(&captured);
/// let sink = FnSink::new(move |bytes: &[u8]| {
///     target.lock().unwrap().push_str(&String::from_utf8_lossy(bytes));
/// });
///
/// sink.write(b"captured line\n").unwrap();
/// assert_eq!(captured.lock().unwrap().as_str(), "captured line\n");
/// ```
pub struct FnSink<F> {
    callback: F,
}

impl<F> FnSink<F>
where
    F: Fn(&[u8]) + Send + Sync,
{
    /// Wraps `callback` as a sink.
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> LogSink for FnSink<F>
where
    F: Fn(&[u8]) + Send + Sync,
{
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        (self.callback)(bytes);
        Ok(())
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
