//! Tracer provider that exports spans to a local OTLP/JSON file.
//!
//! Plugins run inside the WASI sandbox without a collector to talk to, so
//! spans are written next to the plugin's data instead of sent over the
//! network.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::OtlpEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one OTLP/JSON line.
#[derive(Debug)]
struct OtlpFileExporter {
    file: RotatingFile,
    encoder: OtlpEncoder,
    stopped: bool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace file exporter stopped"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }
}

/// Builds a provider whose spans land in `path`, exported as each span ends.
pub fn file_tracer_provider(
    path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = OtlpFileExporter {
        file: RotatingFile::new(path, policy),
        encoder: OtlpEncoder::new(&resource, scope),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
