//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name in exported traces.
const SERVICE_NAME: &str = "flagdial";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "flagdial-otlp.json";

/// Installs the global subscriber, exporting spans to the trace file.
///
/// The filter directive is `config.trace_level`, defaulting to `"info"`.
/// Tracing is optional: when the data directory cannot be created, or a
/// subscriber is already installed, this returns without doing anything.
///
/// ```rust
/// use flagdial::observability::init_tracing;
/// use flagdial::Config;
///
/// let config = Config {
///     trace_level: Some("flagdial=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
