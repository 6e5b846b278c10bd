#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the destination side of the logging core: the
//! [`LogSink`] capability and a handful of stock implementations. A sink
//! accepts a finished message as a byte slice and reports success or
//! failure through [`std::io::Result`]. It knows nothing about severities,
//! tags or source locations; those are resolved by the `logging` crate before
//! the bytes reach the sink.
//!
//! # Design
//!
//! [`LogSink`] takes `&self` and requires `Send + Sync`, so a sink installed in
//! the process-wide logger can be reached from any worker thread. Each sink is
//! responsible for its own synchronisation: [`WriterSink`] serialises writes
//! through a mutex, [`MemorySink`] records behind a shared lock, and
//! [`FnSink`] leaves the decision to the wrapped closure.
//!
//! [`WriterSink`] follows a [`LineMode`] so that records which do not already
//! end in a newline are terminated before they reach a line-oriented stream.
//!
//! # Invariants
//!
//! - A single [`LogSink::write`] call receives exactly one log record.
//! - Sinks never panic on write failure; errors are returned to the caller,
//!   which for the logger means they are counted and dropped.
//! - `LineMode::WithNewline` never doubles an existing trailing newline.
//!
//! # Examples
//!
//! Capture two records in memory and inspect them:
//!
//! ```
//! use logging_sink::{LogSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! sink.write(b"first\n").unwrap();
//! sink.write(b"second\n").unwrap();
//!
//! assert_eq!(sink.write_count(), 2);
//! assert_eq!(sink.contents_lossy(), "first\nsecond\n");
//! ```
//!
//! Terminate unterminated records when writing into a buffer:
//!
//! ```
//! use logging_sink::{LineMode, LogSink, WriterSink};
//!
//! let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline);
//! sink.write(b"ready").unwrap();
//! assert_eq!(sink.into_inner(), b"ready\n".to_vec());
//! ```
//!
//! # See also
//!
//! - `logging` crate for the severity filter, entries and the global logger.

mod line_mode;
mod sink;

pub use line_mode::LineMode;
pub use sink::{CustomLoggingFunction, FnSink, LogSink, MemorySink, NullSink, WriterSink};
