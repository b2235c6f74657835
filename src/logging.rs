use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "catalog_pricing.log";
const DEFAULT_FILTER: &str = "catalog_pricing=info,warn";

/// Installs the global subscriber: human-readable lines on stdout and a
/// JSON copy in `logs/catalog_pricing.log`, rotated daily.
///
/// `RUST_LOG` replaces the default filter when set.
pub fn init_logging() {
    // A missing log dir only disables the file copy
    let _ = fs::create_dir_all(LOG_DIR);

    let (json_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(json_writer))
        .with(fmt::layer().with_target(false).with_writer(std::io::stdout))
        .init();

    // The run is one short batch; the guard lives until exit
    std::mem::forget(guard);
}
