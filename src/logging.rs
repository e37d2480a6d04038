//! Tracing setup for the site process: human-readable request and submission
//! logs on stderr, structured JSON in a daily file for the host's log shipper.

use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "site.log";

/// Site crate at info, tower-http request spans at info, everything else at warn.
pub const DEFAULT_FILTER: &str = "harborline_site=info,tower_http=info,warn";

/// Installs the global subscriber. `RUST_LOG` replaces [`DEFAULT_FILTER`].
///
/// stdout stays free for CLI output such as `harborline_site sitemap`.
pub fn init_logging() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("log directory {} unavailable: {}", LOG_DIR, e);
    }

    let (file_writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX));

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    // Submission logs written just before shutdown still need flushing.
    std::mem::forget(guard);
}
