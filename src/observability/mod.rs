//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK
//!                → FileSpanExporter → RotatingFile (OTLP JSON lines)
//! ```
//!
//! Traces go to `~/.local/share/zellij/neonfeed/neonfeed-otlp.json`, which
//! rotates at 10 MB keeping three backups. The level comes from the
//! `trace_level` plugin option and defaults to `"info"`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and OTLP JSON formatting
//! - `file_writer`: Rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use exporter::{file_tracer_provider, otlp_document, FileSpanExporter};
pub use file_writer::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, trace_file_in, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
