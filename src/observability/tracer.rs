//! Tracer provider exporting spans to a local OTLP JSON file.
//!
//! Spans are exported one batch per line through a simple (synchronous)
//! span processor, so nothing is lost if the shell exits without a flush.

use super::file_writer::TraceFile;
use super::span_formatter::OtlpJson;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope name used for the tracer and in exported documents.
pub const SCOPE: &str = "fraccalc";

struct FileSpanExporter {
    file: TraceFile,
    encoder: OtlpJson,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file: TraceFile, resource: Resource) -> Self {
        Self {
            file,
            encoder: OtlpJson::new(resource, SCOPE),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJson::new(resource.clone(), SCOPE);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("encoder", &self.encoder)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider writing every finished span to `path`.
///
/// # Parameters
///
/// * `path` - Trace file; created on first export, rotated at 10 MB
/// * `resource` - Resource attributes attached to every exported batch
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(TraceFile::new(path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
