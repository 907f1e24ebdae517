//! Log output for the quiz server.
//!
//! Two targets are emitted by this crate:
//! - `mandarin_helper`: startup, shutdown, socket lifecycle, page render failures.
//! - `quiz`: sessions started, answers checked, data feed problems.
//!
//! `LOG_LEVEL` takes `EnvFilter` directives and falls back to [`DEFAULT_FILTER`].
//! `LOG_FORMAT=json` switches to one JSON object per line; anything else is the
//! human-readable format. Per-request HTTP spans come from the router's TraceLayer.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,quiz=debug,mandarin_helper=debug,tower_http=info,axum=info";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
