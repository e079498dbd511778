//! # hierlog
//!
//! Structured, leveled logging with parent/child loggers.
//!
//! ## Features
//!
//! - **Hierarchies**: child loggers share delivery with their root but keep
//!   their own name, level and extra sinks
//! - **Three line formats**: plain text columns, colored text and JSON
//! - **Two delivery modes**: blocking writes on the caller's thread, or a
//!   bounded queue drained by a single background worker
//! - **Properties**: key/value pairs attached per message
//!
//! ```
//! use hierlog::prelude::*;
//!
//! let memory = MemorySink::new();
//! let root = Logger::builder()
//!     .name("app")
//!     .writer(memory.clone(), OutputFormat::Text)
//!     .build();
//!
//! let db = root.local().name("database").level(LogLevel::Debug).build();
//! db.debug("connected");
//! root.debug("hidden at Info");
//!
//! assert_eq!(memory.lines().len(), 1);
//! assert!(memory.lines()[0].contains("| databas |"));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        FatalSignal, FieldValue, LogLevel, Logger, LoggerBuilder, LoggerError, Message,
        OutputFormat, OverflowPolicy, Properties, Result, WriteMode,
    };
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::core::{
    Emphasis, FatalSignal, FieldValue, LocalBuilder, LogLevel, Logger, LoggerBuilder,
    LoggerError, Message, OutputFormat, OverflowPolicy, Properties, Record, Result, Sink,
    WriteMode, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use sinks::{FileSink, MemorySink};
