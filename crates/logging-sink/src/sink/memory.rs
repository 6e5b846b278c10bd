use super::LogSink;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory sink that keeps every record it receives.
///
/// Cloning a `MemorySink` yields another handle to the same storage, so one
/// handle can be installed in a logger while the caller keeps the other to
/// inspect what was written. Hosts embedding the logger can use it to capture
/// output for later display; tests use it to observe routing decisions.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    records: Mutex<Vec<Vec<u8>>>,
    flushes: AtomicUsize,
}

impl MemorySink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record written so far, in write order.
    #[must_use]
    pub fn records(&self) -> Vec<Vec<u8>> {
        self.lock().clone()
    }

    /// Returns all records concatenated.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.lock().concat()
    }

    /// Returns all records concatenated and decoded lossily as UTF-8.
    #[must_use]
    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of [`LogSink::write`] calls received.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.lock().len()
    }

    /// Number of [`LogSink::flush`] calls received.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.shared.flushes.load(Ordering::Relaxed)
    }

    /// Discards recorded output and resets the flush counter.
    pub fn clear(&self) {
        self.lock().clear();
        self.shared.flushes.store(0, Ordering::Relaxed);
    }

    /// Removes and returns every record written so far.
    pub fn take(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<u8>>> {
        self.shared
            .records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock().push(bytes.to_vec());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.shared.flushes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
