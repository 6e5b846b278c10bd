//! crates/logging/src/logger.rs
//! Threshold, trace mode and backend routing for completed entries.

use crate::backend::Backend;
use crate::entry::LogEntry;
use crate::error::LoggingError;
use crate::level::LoggingLevel;
use crate::location::SourceLocation;
use crate::severity::Severity;
use logging_sink::{FnSink, LogSink};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

type BackendFactory = Box<dyn Fn() -> Backend + Send + Sync>;

/// Severity-filtered logger with a normal and a trace sink pair.
///
/// The process normally uses the shared instance returned by
/// [`logger()`](crate::logger); additional instances can be built with
/// [`Logger::new`] when a component needs its own destinations.
///
/// # Filtering
///
/// [`fast_log_filter`](Self::fast_log_filter) is the only check on the hot
/// path. It reads two relaxed atomics: a statement passes when trace mode is
/// on or its severity passes the threshold. The threshold and flags are plain
/// shared scalars; concurrent writers race and the last store wins.
///
/// # Routing
///
/// [`output`](Self::output) writes to the trace pair while trace mode is on
/// and to the normal pair otherwise. Within a pair the low sink receives
/// every record and the high sink additionally receives records whose
/// severity passes the [high-priority cut-off](Self::set_high_priority_threshold).
/// Sink failures are counted and never reach the caller.
///
/// # Backend replacement
///
/// Sinks sit behind a lock so replacing them is memory safe at any time, but
/// replacement is meant for setup and teardown, not for the middle of a
/// parallel computation that is logging.
pub struct Logger {
    threshold: AtomicU8,
    high_priority_threshold: AtomicU8,
    output_extended_info: AtomicBool,
    have_trace_log: AtomicBool,
    backend: RwLock<Backend>,
    trace_backend: RwLock<Option<Backend>>,
    default_backend: BackendFactory,
    write_failures: AtomicU64,
}

impl Logger {
    /// Threshold of a fresh logger.
    pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

    /// High-priority cut-off of a fresh logger.
    pub const DEFAULT_HIGH_PRIORITY_THRESHOLD: Severity = Severity::Warning;

    /// Creates a logger writing to standard error.
    pub fn new() -> Self {
        Self::with_default_backend(Backend::stderr)
    }

    /// Creates a logger whose default destination is produced by `factory`.
    ///
    /// The factory runs once now and again on every
    /// [`restore_default_backend`](Self::restore_default_backend).
    pub fn with_default_backend<F>(factory: F) -> Self
    where
        F: Fn() -> Backend + Send + Sync + 'static,
    {
        let backend = factory();
        Self {
            threshold: AtomicU8::new(Self::DEFAULT_SEVERITY.as_u8()),
            high_priority_threshold: AtomicU8::new(Self::DEFAULT_HIGH_PRIORITY_THRESHOLD.as_u8()),
            output_extended_info: AtomicBool::new(false),
            have_trace_log: AtomicBool::new(false),
            backend: RwLock::new(backend),
            trace_backend: RwLock::new(None),
            default_backend: Box::new(factory),
            write_failures: AtomicU64::new(0),
        }
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    /// Returns `true` when a statement of `severity` should be built.
    #[inline]
    pub fn fast_log_filter(&self, severity: Severity) -> bool {
        self.have_trace_log.load(Ordering::Relaxed)
            || severity.as_u8() <= self.threshold.load(Ordering::Relaxed)
    }

    /// Sets the threshold used by [`fast_log_filter`](Self::fast_log_filter).
    pub fn set_severity(&self, severity: Severity) {
        self.threshold.store(severity.as_u8(), Ordering::Relaxed);
    }

    /// Current threshold.
    pub fn severity(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
            .unwrap_or(Self::DEFAULT_SEVERITY)
    }

    /// Sets the severity at or above which records also go to the high sink.
    pub fn set_high_priority_threshold(&self, severity: Severity) {
        self.high_priority_threshold
            .store(severity.as_u8(), Ordering::Relaxed);
    }

    /// Current high-priority cut-off.
    pub fn high_priority_threshold(&self) -> Severity {
        Severity::from_u8(self.high_priority_threshold.load(Ordering::Relaxed))
            .unwrap_or(Self::DEFAULT_HIGH_PRIORITY_THRESHOLD)
    }

    /// Enables or disables the metadata header in emitted records.
    pub fn set_output_extended_info(&self, value: bool) {
        self.output_extended_info.store(value, Ordering::Relaxed);
    }

    /// Whether extended info was requested explicitly.
    pub fn output_extended_info(&self) -> bool {
        self.output_extended_info.load(Ordering::Relaxed)
    }

    /// Whether records currently carry the metadata header: extended info
    /// was requested or trace mode is on.
    #[inline]
    pub fn need_extended_info(&self) -> bool {
        self.output_extended_info() || self.trace_active()
    }

    /// Whether a trace sink is installed.
    #[inline]
    pub fn trace_active(&self) -> bool {
        self.have_trace_log.load(Ordering::Relaxed)
    }

    // ------------------------------------------------------------------
    // Level mapping
    // ------------------------------------------------------------------

    /// Installs the threshold that corresponds to `level`.
    pub fn set_logging_level(&self, level: LoggingLevel) {
        self.set_severity(level.severity());
    }

    /// Validates `raw` as a [`LoggingLevel`] and installs it.
    ///
    /// Invalid input leaves the logger untouched.
    pub fn try_set_logging_level<T>(&self, raw: T) -> Result<(), LoggingError>
    where
        LoggingLevel: TryFrom<T, Error = LoggingError>,
    {
        let level = LoggingLevel::try_from(raw)?;
        self.set_logging_level(level);
        Ok(())
    }

    /// Warnings and worse only.
    pub fn set_silent_mode(&self) {
        self.set_logging_level(LoggingLevel::Silent);
    }

    /// Everything, including debug output.
    ///
    /// This selects [`LoggingLevel::Debug`], not [`LoggingLevel::Verbose`].
    pub fn set_verbose_mode(&self) {
        self.set_logging_level(LoggingLevel::Debug);
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    /// Starts an entry without consulting the filter.
    pub fn entry(
        &self,
        severity: Severity,
        tag: &'static str,
        location: SourceLocation,
    ) -> LogEntry<'_> {
        LogEntry::new(self, location, tag, severity)
    }

    /// Runs `build` on a fresh entry only when `severity` passes the filter.
    ///
    /// Nothing captured by `build` is evaluated for suppressed statements.
    ///
    /// ```
    /// use logging::{Logger, MemorySink, Severity};
    ///
    /// let logger = Logger::new();
    /// let low = MemorySink::new();
    /// logger.reset_backend(low.clone(), MemorySink::new());
    ///
    /// logger.log_with(Severity::Debug, "DEBUG", |_| unreachable!("filtered out"));
    /// logger.log_with(Severity::Error, "ERROR", |entry| {
    ///     entry.append_str("loss is NaN\n");
    /// });
    ///
    /// assert_eq!(low.contents_lossy(), "loss is NaN\n");
    /// ```
    #[track_caller]
    pub fn log_with<F>(&self, severity: Severity, tag: &'static str, build: F)
    where
        F: FnOnce(&mut LogEntry<'_>),
    {
        if self.fast_log_filter(severity) {
            let mut entry = self.entry(severity, tag, SourceLocation::caller());
            build(&mut entry);
        }
    }

    /// Routes a finished entry to the active sink pair.
    ///
    /// Called by [`LogEntry`]'s `Drop`; calling it directly emits the entry's
    /// current content once more.
    pub fn output(&self, entry: &LogEntry<'_>) {
        let bytes = if self.need_extended_info() {
            entry.as_bytes()
        } else {
            entry.payload()
        };
        let high_priority = self.high_priority_threshold().allows(entry.severity());

        if self.trace_active() {
            if let Some(trace) = self.read_trace_backend().as_ref() {
                self.count_failures(trace.write(bytes, high_priority));
                return;
            }
        }

        self.count_failures(self.read_backend().write(bytes, high_priority));
    }

    // ------------------------------------------------------------------
    // Backend management
    // ------------------------------------------------------------------

    /// Replaces the normal sink pair. The previous sinks are flushed and
    /// dropped.
    pub fn reset_backend<L, H>(&self, low: L, high: H)
    where
        L: LogSink + 'static,
        H: LogSink + 'static,
    {
        self.install_backend(Backend::new(low, high));
    }

    /// Replaces the normal sink pair with a prepared [`Backend`].
    pub fn install_backend(&self, backend: Backend) {
        let previous = std::mem::replace(&mut *self.write_backend(), backend);
        self.count_failures(previous.flush());
    }

    /// Installs a trace sink, or removes the trace pair when `low` is `None`.
    ///
    /// While a trace sink is installed every statement passes the filter,
    /// records carry the metadata header and go to the trace sink instead of
    /// the normal pair.
    pub fn reset_trace_backend(&self, low: Option<Box<dyn LogSink>>) {
        self.install_trace_backend(low.map(Backend::low_only));
    }

    /// Installs a trace pair with both a low and a high sink.
    pub fn reset_trace_backend_pair<L, H>(&self, low: L, high: H)
    where
        L: LogSink + 'static,
        H: LogSink + 'static,
    {
        self.install_trace_backend(Some(Backend::new(low, high)));
    }

    fn install_trace_backend(&self, backend: Option<Backend>) {
        let enable = backend.is_some();
        let previous = {
            let mut slot = self.write_trace_backend();
            if !enable {
                self.have_trace_log.store(false, Ordering::Relaxed);
            }
            let previous = std::mem::replace(&mut *slot, backend);
            if enable {
                self.have_trace_log.store(true, Ordering::Relaxed);
            }
            previous
        };
        if let Some(previous) = previous {
            self.count_failures(previous.flush());
        }
    }

    /// Reinstalls the default destination and removes any trace pair.
    pub fn restore_default_backend(&self) {
        self.install_backend((self.default_backend)());
        self.install_trace_backend(None);
    }

    /// Installs two callbacks as the normal sink pair.
    ///
    /// Plain function pointers of type
    /// [`CustomLoggingFunction`](logging_sink::CustomLoggingFunction) work, as
    /// do closures.
    pub fn set_custom_logging_function<L, H>(&self, low: L, high: H)
    where
        L: Fn(&[u8]) + Send + Sync + 'static,
        H: Fn(&[u8]) + Send + Sync + 'static,
    {
        self.reset_backend(FnSink::new(low), FnSink::new(high));
    }

    /// Undoes [`set_custom_logging_function`](Self::set_custom_logging_function)
    /// by restoring the default destination.
    pub fn restore_original_logger(&self) {
        self.restore_default_backend();
    }

    /// Flushes every installed sink.
    pub fn flush(&self) {
        self.count_failures(self.read_backend().flush());
        if let Some(trace) = self.read_trace_backend().as_ref() {
            self.count_failures(trace.flush());
        }
    }

    /// Number of sink writes and flushes that failed since creation.
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    fn count_failures(&self, failures: u64) {
        if failures > 0 {
            self.write_failures.fetch_add(failures, Ordering::Relaxed);
        }
    }

    fn read_backend(&self) -> RwLockReadGuard<'_, Backend> {
        self.backend
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn write_backend(&self) -> RwLockWriteGuard<'_, Backend> {
        self.backend
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn read_trace_backend(&self) -> RwLockReadGuard<'_, Option<Backend>> {
        self.trace_backend
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn write_trace_backend(&self) -> RwLockWriteGuard<'_, Option<Backend>> {
        self.trace_backend
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("severity", &self.severity())
            .field("high_priority_threshold", &self.high_priority_threshold())
            .field("output_extended_info", &self.output_extended_info())
            .field("trace_active", &self.trace_active())
            .field("write_failures", &self.write_failures())
            .finish_non_exhaustive()
    }
}
