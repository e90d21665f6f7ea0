#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the output destinations used by the `logging`
//! facility. A sink receives one fully rendered line per log record and is
//! responsible only for getting those bytes to their destination. Filtering,
//! formatting and the host-supplied lock all live in the `logging` crate.
//!
//! # Design
//!
//! Every destination implements [`LogSink`]. The trait takes `&self` so a
//! single sink can be shared between threads behind a [`SinkHandle`]; each
//! implementation keeps whatever interior state it needs to remain memory
//! safe. Ordering between records written by different threads is not
//! guaranteed by the sink and is the concern of the lock callback installed
//! on the logger.
//!
//! The crate ships three destinations:
//!
//! - [`StandardStream`] writes to stdout or stderr and reports whether that
//!   stream is attached to a terminal.
//! - [`WriterSink`] owns an arbitrary [`std::io::Write`] implementor such as
//!   an opened log file.
//! - [`MemorySink`] appends to a shared in-memory buffer that the host can
//!   inspect, which is how tests observe logger output.
//!
//! # Invariants
//!
//! - [`LogSink::write_line`] performs exactly one `write_all` of the supplied
//!   bytes. Sinks never add or strip terminators.
//! - Sinks never panic on I/O failure; errors are returned to the caller,
//!   which may discard them.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LogSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! sink.write_line(b"first\n").unwrap();
//! sink.write_line(b"second\n").unwrap();
//!
//! assert_eq!(sink.write_count(), 2);
//! assert_eq!(sink.lines(), vec!["first".to_owned(), "second".to_owned()]);
//! ```

mod sink;

pub use sink::{LogSink, MemorySink, SinkHandle, StandardStream, WriterSink, stderr, stdout};
