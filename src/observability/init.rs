//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to exported spans.
const SERVICE_NAME: &str = "permview";

/// Initializes the tracing subscriber with file-based span export.
///
/// Installs a registry with an [`EnvFilter`] built from `config.trace_level`
/// (default `"info"`) and an OpenTelemetry layer writing to `config.trace_file`.
///
/// Does nothing when `config.trace_file` is unset or its directory cannot be
/// created. Safe to call more than once; only the first successful call installs
/// a subscriber.
///
/// # Example
///
/// ```rust
/// use permview::observability::init_tracing;
/// use permview::Config;
///
/// let config = Config {
///     trace_level: Some("permview=debug".to_string()),
///     trace_file: Some(std::env::temp_dir().join("permview-otlp.json")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(trace_file) = config.trace_file.clone() else {
        return;
    };

    if let Some(parent) = trace_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = exporter::create_tracer_provider(trace_file, resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
}
