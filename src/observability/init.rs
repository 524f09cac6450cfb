//! Tracing subscriber setup.

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "neonfeed-otlp.json";

/// Level used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to
/// `<data dir>/neonfeed-otlp.json`.
///
/// The filter comes from `config.trace_level`, falling back to `"info"`; any
/// `EnvFilter` directive is accepted (`"neonfeed=debug,warn"`).
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed this returns without doing anything, so
/// it is safe to call more than once.
///
/// # Example
///
/// ```no_run
/// use neonfeed::observability::init_tracing;
/// use neonfeed::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let data_dir = crate::infrastructure::get_data_dir();

    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let _ = install(&data_dir, level);
}

/// Path of the trace log under `data_dir`.
#[must_use]
pub fn trace_file_in(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE_NAME)
}

fn install(data_dir: &Path, level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = file_tracer_provider(trace_file_in(data_dir), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(layer)
        .try_init()
}
