//! Tracer provider backed by a local trace file.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each export batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: bool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource),
            is_shutdown: false,
        }
    }

    fn write_batch(&mut self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown {
            return Err(TraceError::from("trace file exporter is shut down"));
        }

        let document = self.formatter.format_batch(batch);
        let line = serde_json::to_string(&document).map_err(|e| TraceError::from(e.to_string()))?;
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every finished span to `file_path`.
///
/// Spans are exported synchronously as they end; the plugin runtime is
/// single-threaded and has no background executor for batching.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn export_after_shutdown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let mut exporter = FileSpanExporter::new(path.clone(), Resource::new(vec![KeyValue::new("service.name", "flagdial")]));

        assert!(exporter.write_batch(&[]).is_ok());
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"resourceSpans\""));
    }
}
