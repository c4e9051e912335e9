use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_VAR: &str = "WEEKLY_REPORT_LOG_LEVEL";
const DEFAULT_FILTER: &str = "info";

/// Filter directive from `WEEKLY_REPORT_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn filter_directive<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_VAR)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Logs go to stderr; stdout is reserved for the report.
pub fn init() {
    let directive = filter_directive(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&directive))
        .init();
    tracing::debug!("weekly_report: log filter: {}", directive);
}
