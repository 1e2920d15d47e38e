//! Tracing with file-based OTLP export.
//!
//! Zellij plugins have no network access by default, so spans go to a local
//! file instead of a collector:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → flagdial-otlp.json
//! ```
//!
//! The file lives in the plugin data directory
//! (`~/.local/share/zellij/flagdial/`), one OTLP JSON document per line. It is
//! rotated at 10 MiB into `.1`, `.2` and `.3` backups.
//!
//! The filter comes from the `trace_level` plugin option and accepts any
//! `EnvFilter` directive; it defaults to `"info"`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
