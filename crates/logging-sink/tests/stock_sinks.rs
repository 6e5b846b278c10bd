//! Integration tests for the stock sink implementations.
//!
//! These tests exercise the sinks through the public [`LogSink`] trait only,
//! the same way the logger drives them, including sharing across threads and
//! appending to files on disk.

use logging_sink::{FnSink, LineMode, LogSink, MemorySink, NullSink, WriterSink};
use std::sync::{Arc, Mutex};
use std::thread;

// ============================================================================
// File Sink Tests
// ============================================================================

/// Verifies records reach the file once the sink is flushed.
#[test]
fn file_sink_writes_after_flush() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("train.log");

    let sink = WriterSink::append_to_file(&path).expect("open log file");
    sink.write(b"iteration 1\n").unwrap();
    sink.write(b"iteration 2").unwrap();
    sink.flush().unwrap();

    let text = std::fs::read_to_string(&path).expect("read log file");
    assert_eq!(text, "iteration 1\niteration 2\n");
}

/// Verifies each record is on disk as soon as the write returns.
#[test]
fn file_sink_record_visible_without_flush() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("train.log");

    let sink = WriterSink::append_to_file(&path).expect("open log file");
    sink.write(b"best iteration 41").unwrap();

    let text = std::fs::read_to_string(&path).expect("read log file");
    assert_eq!(text, "best iteration 41\n");
    drop(sink);
}

/// Verifies reopening a file appends rather than truncating.
#[test]
fn file_sink_appends_to_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("train.log");
    std::fs::write(&path, "previous run\n").expect("seed file");

    {
        let sink = WriterSink::append_to_file(&path).expect("open log file");
        sink.write(b"next run\n").unwrap();
    }

    let text = std::fs::read_to_string(&path).expect("read log file");
    assert_eq!(text, "previous run\nnext run\n");
}

/// Verifies opening a file in a missing directory reports an error.
#[test]
fn file_sink_reports_open_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("train.log");

    assert!(WriterSink::append_to_file(&path).is_err());
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Verifies concurrent writers never interleave within a record.
#[test]
fn writer_sink_keeps_records_whole_across_threads() {
    let sink = Arc::new(WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                for i in 0..50 {
                    let record = format!("worker {worker} tree {i}");
                    sink.write(record.as_bytes()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker finished");
    }

    let sink = Arc::try_unwrap(sink).expect("all workers joined");
    let text = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert_eq!(text.lines().count(), 200);
    assert!(text.lines().all(|line| line.starts_with("worker ")));
}

/// Verifies the memory sink records every write from every thread.
#[test]
fn memory_sink_collects_from_many_threads() {
    let sink = MemorySink::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sink = sink.clone();
            thread::spawn(move || sink.write(b"x").unwrap())
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread finished");
    }

    assert_eq!(sink.write_count(), 8);
}

// ============================================================================
// Trait Object Tests
// ============================================================================

/// Verifies every stock sink can be boxed as a trait object.
#[test]
fn stock_sinks_box_as_trait_objects() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let target = Arc::clone(&captured);

    let sinks: Vec<Box<dyn LogSink>> = vec![
        Box::new(NullSink),
        Box::new(MemorySink::new()),
        Box::new(WriterSink::new(Vec::new())),
        Box::new(FnSink::new(move |bytes: &[u8]| {
            target.lock().unwrap().extend_from_slice(bytes);
        })),
    ];

    for sink in &sinks {
        sink.write(b"fan-out").unwrap();
        sink.flush().unwrap();
    }

    assert_eq!(captured.lock().unwrap().as_slice(), b"fan-out");
}
