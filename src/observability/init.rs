//! Tracing subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Menuboard";
const TRACE_FILE: &str = "menuboard-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that writes to
/// `~/.local/share/zellij/menuboard/menuboard-otlp.json`.
///
/// Tracing is best effort. If the data directory cannot be created the
/// plugin runs without a subscriber, and calling this twice keeps the first.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::file_tracer_provider(
        data_dir.join(TRACE_FILE),
        RotationPolicy::default(),
        resource,
        SERVICE_NAME,
    );

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        .try_init();
}
