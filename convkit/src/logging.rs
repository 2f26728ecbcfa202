//! Log output.
//!
//! The engine only emits `tracing` events; a host that wants them printed
//! installs a subscriber once at startup with [`init`].

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Map a level name to a [`Level`]. Unrecognised names mean `INFO`.
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Install a stderr `fmt` subscriber filtered at `level`, with `RUST_LOG`
/// directives applied on top.
///
/// # Panics
/// Panics if a global subscriber is already installed; use [`try_init`]
/// when that can happen.
pub fn init(level: &str) {
    fmt()
        .with_env_filter(filter(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Like [`init`], but returns `false` instead of panicking when a global
/// subscriber is already installed.
pub fn try_init(level: &str) -> bool {
    fmt()
        .with_env_filter(filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
