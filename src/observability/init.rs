//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name and instrumentation scope of exported spans.
const SERVICE_NAME: &str = "album-search";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "album-search-otlp.json";

/// Installs the global subscriber: `tracing` spans go through OpenTelemetry
/// into `<data dir>/album-search-otlp.json`.
///
/// The filter comes from `RUST_LOG` when set, else `config.trace_level`, else
/// `"info"`. If the data directory cannot be created tracing stays off. Calling
/// this more than once is harmless; only the first call installs anything.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.trace_level.as_deref().unwrap_or("info")));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
