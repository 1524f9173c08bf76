//! Tracing setup with optional OpenTelemetry file export.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (stderr)
//!                            → tracing-opentelemetry → SDK → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! The exporter path is taken when `trace_file` is configured. Trace files
//! rotate at 10 MB and keep three backups.
//!
//! # Modules
//!
//! - `init`: Subscriber installation
//! - `tracer`: Tracer provider and file span exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_LEVEL};
