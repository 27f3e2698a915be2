//! Tracing setup
//!
//! Logs go to stderr so stdout carries only the fingerprint or the report.
//! The filter is read from `GIT_SUBMODULE_DESCRIBE_LOG` in `EnvFilter`
//! syntax and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GIT_SUBMODULE_DESCRIBE_LOG";

const DEFAULT_FILTER: &str = "warn";

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; later calls are no-ops
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
