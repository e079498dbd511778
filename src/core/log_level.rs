//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

/// Semantic highlight category used by the decorated text format.
///
/// The formatter only tags a category; how it looks on a terminal is up to
/// `colored` and the terminal's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Alert,
    Caution,
    Success,
    Notice,
}

impl Emphasis {
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Emphasis::Alert => Red,
            Emphasis::Caution => Yellow,
            Emphasis::Success => Green,
            Emphasis::Notice => Magenta,
        }
    }
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            LogLevel::Fatal | LogLevel::Error => Emphasis::Alert,
            LogLevel::Warning => Emphasis::Caution,
            LogLevel::Info => Emphasis::Success,
            LogLevel::Debug => Emphasis::Notice,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for column layouts
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
