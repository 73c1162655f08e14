//! Event System
//!
//! Activity events produced when menu requests complete. They are the
//! dashboard's notification layer and are mirrored to the `log` facade.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The menu operation an event reports on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    Availability,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub operation: Operation,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(operation: Operation, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            operation,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(operation: Operation, msg: String) -> Self {
        Self::new(operation, msg, EventType::Success, LogLevel::Info)
    }

    pub fn error(operation: Operation, msg: String, log_level: LogLevel) -> Self {
        Self::new(operation, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.operation, self.msg
        )
    }
}
