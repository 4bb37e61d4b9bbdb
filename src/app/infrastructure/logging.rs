use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "THEMEFORGE_LOG";

/// Build the filter used by the fmt subscriber.
///
/// `THEMEFORGE_LOG` wins over `RUST_LOG`; when neither is set (or both fail
/// to parse) the level from settings is used.
pub fn build_filter(fallback_level: &str) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init(fallback_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
