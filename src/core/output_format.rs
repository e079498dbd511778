//! Line formats for log records
//!
//! Provides three renderings of a record:
//! - Text: fixed-width columns `time | level | name | text [| key=value]*`
//! - TextColor: the same columns with level and name highlighted
//! - Json: one object per line with `time`, `level`, `module`, `message`, `props`

use super::error::{LoggerError, Result};
use super::record::Record;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Maximum number of characters of a logger name that appear in output
pub const NAME_WIDTH: usize = 7;

/// Width of the level column
pub const LEVEL_WIDTH: usize = 5;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain text columns
    ///
    /// Example: `2025/01/08 10:30:45 |  INFO |    main | Request processed | id=7`
    Text,

    /// Text columns with the level and name wrapped in terminal colors
    #[default]
    TextColor,

    /// JSON object per line
    ///
    /// Example: `{"time":"2025/01/08 10:30:45","level":"INFO","module":"main","message":"Request processed"}`
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    time: &'a str,
    level: &'static str,
    module: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    props: serde_json::Map<String, serde_json::Value>,
}

/// Cut a logger name down to its first [`NAME_WIDTH`] characters
pub fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(NAME_WIDTH) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Format the record timestamp with a strftime pattern.
///
/// Invalid patterns surface as a formatter error instead of a panic.
pub fn format_timestamp(record: &Record, date_format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", record.timestamp.format(date_format))
        .map_err(|_| LoggerError::formatter("time", format!("invalid date format '{}'", date_format)))?;
    Ok(out)
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::TextColor => "text-color",
            OutputFormat::Json => "json",
        }
    }

    /// Render a record as a single line, without a trailing newline
    pub fn render(&self, record: &Record, date_format: &str) -> Result<String> {
        let time = format_timestamp(record, date_format)?;
        let name = truncate_name(&record.logger_name);

        match self {
            OutputFormat::Text => Ok(Self::render_text(record, &time, name)),
            OutputFormat::TextColor => Ok(Self::render_text_color(record, &time, name)),
            OutputFormat::Json => Self::render_json(record, &time, name),
        }
    }

    fn render_text(record: &Record, time: &str, name: &str) -> String {
        let mut line = format!(
            "{} | {:>lw$} | {:>nw$} | {}",
            time,
            record.level,
            name,
            record.message,
            lw = LEVEL_WIDTH,
            nw = NAME_WIDTH,
        );
        for (key, value) in record.props.iter() {
            let _ = write!(line, " | {}={}", key, value);
        }
        line
    }

    fn render_text_color(record: &Record, time: &str, name: &str) -> String {
        // pad before coloring so escape codes do not eat into the column width
        let level = format!("{:>lw$}", record.level, lw = LEVEL_WIDTH)
            .color(record.level.emphasis().color());
        let name = format!("{:>nw$}", name, nw = NAME_WIDTH).blue();

        let mut line = format!("{} | {} | {} | {}", time, level, name, record.message);
        for (key, value) in record.props.iter() {
            let _ = write!(line, " | {}={}", key, value.to_string().cyan());
        }
        line
    }

    fn render_json(record: &Record, time: &str, name: &str) -> Result<String> {
        let line = JsonLine {
            time,
            level: record.level.to_str(),
            module: name,
            message: &record.message,
            props: record.props.to_json_object()?,
        };
        Ok(serde_json::to_string(&line)?)
    }
}
