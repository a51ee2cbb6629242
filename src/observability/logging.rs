//! Structured logging initialisation.
//!
//! Log format and level come from settings; `RUST_LOG` still wins when set
//! so operators can narrow the filter without redeploying.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, Settings};

/// Initialise the global tracing subscriber.
///
/// `debug` (the `--debug` flag / `DEBUG` env var) widens the filter to debug
/// for the application regardless of the configured level.
pub fn init(settings: &Settings, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(settings, debug)));

    let registry = tracing_subscriber::registry().with(filter);

    match settings.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn default_directives(settings: &Settings, debug: bool) -> String {
    let level = if debug {
        "debug".to_string()
    } else {
        settings.log_level.to_ascii_lowercase()
    };
    format!("cir_management_ui={level},tower_http=info")
}
