use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Filter taken from `RUST_LOG` when it is set.
fn env_filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human readable, compact output without timestamps for local development.
/// Panics if a global subscriber was already set.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(env_filter_or("mergington=debug,tower_http=debug"))
        .compact()
        .init();
}

/// JSON lines with the current span attached, for log collectors.
/// Panics if a global subscriber was already set.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_env_filter(env_filter_or("mergington=info,tower_http=info"))
        .init();
}
