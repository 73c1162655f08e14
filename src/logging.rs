//! Log level handling.
//!
//! `RUST_LOG` decides which low-priority activity events reach the screen;
//! every event is also forwarded to the `log` facade.

pub use crate::error_classifier::LogLevel;
use crate::events::Event;
use std::env;

const LOG_TARGET: &str = "restaurant_dashboard::activity";

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Only the first directive counts; "crate=level" keeps the level
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .trim()
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

/// Forward an activity event to whatever logger the host installed.
pub fn record(event: &Event) {
    log::log!(
        target: LOG_TARGET,
        log::Level::from(event.log_level),
        "{} {}: {}",
        event.event_type,
        event.operation,
        event.msg
    );
}
