use super::LogSink;
use std::io;

/// Sink that discards every record.
///
/// Installing it in a backend slot silences that slot without disabling the
/// logger's filtering or routing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl LogSink for NullSink {
    #[inline]
    fn write(&self, _bytes: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
