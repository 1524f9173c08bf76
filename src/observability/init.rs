//! Tracing subscriber setup.

use super::tracer::{file_tracer_provider, SCOPE};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when the configuration names none.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (an [`EnvFilter`] directive such
/// as `"debug"` or `"fraccalc::app=trace"`), falling back to `info`. With
/// `config.trace_file` set, spans are exported as OTLP JSON lines to that
/// file; otherwise events are printed compactly to stderr.
///
/// # Returns
///
/// `true` if this call installed the subscriber. Later calls, or a failure to
/// prepare the trace file's directory, leave tracing as it was and return
/// `false`; the calculator works the same either way.
///
/// # Example
///
/// ```rust
/// use fraccalc::observability::init_tracing;
/// use fraccalc::Config;
///
/// let config = Config {
///     trace_level: Some("warn".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// assert!(!init_tracing(&config));
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let Some(trace_file) = &config.trace_file else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr);
        return tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();
    };

    if let Some(dir) = trace_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if std::fs::create_dir_all(dir).is_err() {
            return false;
        }
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SCOPE),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(trace_file.clone(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok()
}
