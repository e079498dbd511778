//! Core logger types

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod fatal;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod output_format;
pub mod overflow_policy;
pub mod properties;
pub mod record;
pub mod sink;

pub use config::{LocalConfig, SharedConfig, WriteMode};
pub use dispatcher::{Dispatcher, DEFAULT_SHUTDOWN_TIMEOUT};
pub use error::{LoggerError, Result};
pub use fatal::FatalSignal;
pub use log_level::{Emphasis, LogLevel};
pub use logger::{LocalBuilder, Logger, LoggerBuilder};
pub use message::Message;
pub use output_format::OutputFormat;
pub use overflow_policy::OverflowPolicy;
pub use properties::{FieldValue, Properties};
pub use record::Record;
pub use sink::Sink;
