//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written in OTLP JSON, one batch per line, to
//! `<data dir>/album-search-otlp.json`. The file rotates at 10 MB and three
//! backups are kept.
//!
//! # Filter
//!
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` configuration key
//! 3. `"info"`
//!
//! ```rust,no_run
//! use album_search::observability::init_tracing;
//! use album_search::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("tracing is now active");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
