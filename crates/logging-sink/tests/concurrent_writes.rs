//! Integration tests for sharing sinks between threads.
//!
//! A sink performs one `write_all` per line, so lines written from several
//! threads through the same handle must arrive whole even without an
//! external lock.

use std::sync::Arc;
use std::thread;

use logging_sink::{LogSink, MemorySink, SinkHandle, WriterSink};

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

fn hammer(handle: &SinkHandle) {
    let workers: Vec<_> = (0..THREADS)
        .map(|worker| {
            let handle = Arc::clone(handle);
            thread::spawn(move || {
                for n in 0..LINES_PER_THREAD {
                    let line = format!("worker={worker:02} n={n:04}\n");
                    handle.write_line(line.as_bytes()).expect("write succeeds");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker thread");
    }
}

// ============================================================================
// Memory Sink
// ============================================================================

/// Verifies every line written concurrently lands intact in a memory sink.
#[test]
fn memory_sink_keeps_lines_whole() {
    let memory = MemorySink::new();
    let handle: SinkHandle = Arc::new(memory.clone());

    hammer(&handle);

    let lines = memory.lines();
    assert_eq!(memory.write_count(), THREADS * LINES_PER_THREAD);
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert!(
        lines
            .iter()
            .all(|line| line.starts_with("worker=") && line.len() == "worker=00 n=0000".len())
    );
}

/// Verifies per-thread ordering is preserved even when threads interleave.
#[test]
fn memory_sink_preserves_per_thread_order() {
    let memory = MemorySink::new();
    let handle: SinkHandle = Arc::new(memory.clone());

    hammer(&handle);

    for worker in 0..THREADS {
        let prefix = format!("worker={worker:02} ");
        let sequence: Vec<usize> = memory
            .lines()
            .iter()
            .filter_map(|line| line.strip_prefix(&prefix))
            .map(|rest| rest.trim_start_matches("n=").parse().expect("numeric"))
            .collect();
        assert_eq!(sequence, (0..LINES_PER_THREAD).collect::<Vec<_>>());
    }
}

// ============================================================================
// Writer Sink
// ============================================================================

/// Verifies a shared file sink receives every line.
#[test]
fn file_sink_receives_every_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shared.log");
    let handle: SinkHandle = Arc::new(WriterSink::append(&path).expect("open log file"));

    hammer(&handle);
    handle.flush().expect("flush succeeds");

    let text = std::fs::read_to_string(&path).expect("read log file");
    assert_eq!(text.lines().count(), THREADS * LINES_PER_THREAD);
    assert!(text.ends_with('\n'));
}
