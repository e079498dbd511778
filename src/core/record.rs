//! Finalized log record handed to the dispatch engine

use super::log_level::LogLevel;
use super::properties::Properties;
use super::sink::Sink;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// A submitted message. Immutable once built; the drain worker and the
/// per-sink render step only ever read it.
#[derive(Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub logger_name: String,
    pub props: Properties,
    /// Level of the producing logger at the time of the call
    pub(crate) min_level: LogLevel,
    /// Extra sinks of the logger that produced the record, delivered after
    /// the hierarchy's shared sinks.
    pub(crate) local_sinks: Arc<[Arc<Sink>]>,
}

impl Record {
    /// Escape line breaks so one call can never produce more than one line
    fn sanitize_message(message: &str) -> String {
        if !message.contains(['\n', '\r']) {
            return message.to_string();
        }
        message.replace('\n', "\\n").replace('\r', "\\r")
    }

    pub fn new(level: LogLevel, message: &str, logger_name: impl Into<String>) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message),
            timestamp: Local::now(),
            logger_name: logger_name.into(),
            props: Properties::new(),
            min_level: LogLevel::Debug,
            local_sinks: Arc::from(Vec::new()),
        }
    }

    pub fn with_props(mut self, props: Properties) -> Self {
        self.props = props;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub(crate) fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Whether the engine should deliver this record at all
    pub(crate) fn passes_filter(&self) -> bool {
        self.level >= self.min_level && !self.message.is_empty()
    }

    pub(crate) fn with_local_sinks(mut self, sinks: Arc<[Arc<Sink>]>) -> Self {
        self.local_sinks = sinks;
        self
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("timestamp", &self.timestamp)
            .field("logger_name", &self.logger_name)
            .field("props", &self.props)
            .field("min_level", &self.min_level)
            .field("local_sinks", &self.local_sinks.len())
            .finish()
    }
}
