//! Shared and local logger configuration

use super::log_level::LogLevel;
use super::overflow_policy::OverflowPolicy;
use super::sink::Sink;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_NAME: &str = "<...>";
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Delivery discipline of a logger hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WriteMode {
    /// Render and write on the calling thread before the call returns
    #[default]
    Blocking,
    /// Queue the record for the drain worker and return immediately
    NonBlocking,
}

/// Settings shared by a root logger and every child created from it
#[derive(Debug)]
pub struct SharedConfig {
    pub mode: WriteMode,
    pub date_format: String,
    pub sinks: Vec<Arc<Sink>>,
    pub queue_capacity: usize,
    pub overflow_policy: OverflowPolicy,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            mode: WriteMode::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            sinks: Vec::new(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

/// Per-logger settings; copied when a child is created, then owned
/// exclusively by that logger
#[derive(Debug, Clone)]
pub struct LocalConfig {
    pub name: String,
    pub level: LogLevel,
    pub sinks: Arc<[Arc<Sink>]>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: DEFAULT_LEVEL,
            sinks: Arc::from(Vec::new()),
        }
    }
}

/// Check that every item of a strftime pattern is understood by chrono
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let shared = SharedConfig::default();
        assert_eq!(shared.mode, WriteMode::Blocking);
        assert_eq!(shared.date_format, "%Y/%m/%d %H:%M:%S");
        assert_eq!(shared.queue_capacity, 1024);
        assert!(shared.sinks.is_empty());

        let local = LocalConfig::default();
        assert_eq!(local.name, "<...>");
        assert_eq!(local.level, LogLevel::Info);
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%H:%M:%S%.3f"));
        assert!(is_valid_date_format("no specifiers at all"));
        assert!(!is_valid_date_format("%Q"));
    }
}
