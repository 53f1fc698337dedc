//! Tracer provider backed by a file span exporter.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one OTLP JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.formatter.format_batch(&batch).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

/// Builds a provider that exports spans synchronously to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope: &str) -> TracerProvider {
    let exporter = FileSpanExporter {
        writer: FileWriter::new(file_path),
        formatter: SpanFormatter::new(resource.clone(), scope),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn test_spans_land_in_file_as_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album-search-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "album-search")]);

        let provider = create_tracer_provider(path.clone(), resource, "album-search");
        provider.tracer("album-search").in_span("load_albums", |_cx| {});
        drop(provider);

        let contents = std::fs::read_to_string(&path).unwrap();
        let first = contents.lines().next().unwrap();
        let doc: serde_json::Value = serde_json::from_str(first).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"], "load_albums");
    }
}
