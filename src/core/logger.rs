//! Logger handles and their builders

use super::{
    config::{
        is_valid_date_format, LocalConfig, SharedConfig, WriteMode, DEFAULT_DATE_FORMAT,
        DEFAULT_LEVEL, DEFAULT_NAME, DEFAULT_QUEUE_CAPACITY,
    },
    dispatcher::Dispatcher,
    error::Result,
    fatal::FatalSignal,
    log_level::LogLevel,
    message::Message,
    output_format::OutputFormat,
    overflow_policy::OverflowPolicy,
    properties::Properties,
    record::Record,
    sink::Sink,
};
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// A logger handle.
///
/// A root logger is created with [`Logger::builder`]; children are created
/// with [`Logger::local`]. Every logger of a hierarchy shares one
/// [`Dispatcher`] (and with it the delivery mode, date format and shared
/// sinks), while name, level and extra sinks belong to each handle alone.
pub struct Logger {
    engine: Arc<Dispatcher>,
    local: LocalConfig,
}

impl Logger {
    /// Root logger with default settings: blocking, level Info, colored
    /// text on stdout
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for a root logger
    ///
    /// # Example
    /// ```
    /// use hierlog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .name("server")
    ///     .level(LogLevel::Debug)
    ///     .mode(WriteMode::NonBlocking)
    ///     .writer(std::io::sink(), OutputFormat::Json)
    ///     .build();
    ///
    /// logger.info("started");
    /// logger.close();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Start building a child logger.
    ///
    /// The child copies this logger's name, level and extra sinks, then
    /// applies its own options. It shares this logger's dispatch engine.
    #[must_use]
    pub fn local(&self) -> LocalBuilder<'_> {
        LocalBuilder::new(self)
    }

    pub fn name(&self) -> &str {
        &self.local.name
    }

    pub fn level(&self) -> LogLevel {
        self.local.level
    }

    /// Change this logger's level from its name.
    ///
    /// Unlike the builder's `level_name`, an unknown name is reported.
    /// Parents and siblings are unaffected.
    pub fn set_level(&mut self, level: &str) -> Result<()> {
        self.local.level = level.parse()?;
        Ok(())
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.local.level = level;
    }

    /// Delivery mode of the hierarchy
    pub fn mode(&self) -> WriteMode {
        self.engine.mode()
    }

    pub fn date_format(&self) -> &str {
        &self.engine.config().date_format
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.local.level
    }

    pub fn is_closed(&self) -> bool {
        self.engine.is_stopped()
    }

    /// Open a message at `level` to attach properties before submitting
    pub fn entry(&self, level: LogLevel) -> Message<'_> {
        Message::new(self, level)
    }

    /// Submit a message.
    ///
    /// Returns an error only when the hierarchy has already been closed.
    /// Fatal-level messages raise [`FatalSignal`] after delivery.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        self.submit(level, message.as_ref(), Properties::new())
    }

    pub(crate) fn submit(&self, level: LogLevel, text: &str, props: Properties) -> Result<()> {
        let result = self.send(level, text, props);
        if level == LogLevel::Fatal {
            self.raise_fatal(text);
        }
        result
    }

    /// Hand the message to the engine without any fatal handling
    fn send(&self, level: LogLevel, text: &str, props: Properties) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        let record = Record::new(level, text, self.local.name.clone())
            .with_props(props)
            .with_min_level(self.local.level)
            .with_local_sinks(Arc::clone(&self.local.sinks));
        self.engine.submit(record)
    }

    fn raise_fatal(&self, text: &str) -> ! {
        // queued lines, the fatal one included, must reach the sinks first
        self.engine.shutdown();
        FatalSignal::new(self.local.name.clone(), text).raise()
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        let _ = self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        let _ = self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        let _ = self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        let _ = self.log(LogLevel::Error, message);
    }

    /// Log at Fatal, then raise [`FatalSignal`]
    pub fn fatal(&self, message: impl AsRef<str>) -> ! {
        let message = message.as_ref();
        let _ = self.send(LogLevel::Fatal, message, Properties::new());
        self.raise_fatal(message)
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warning, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args.to_string())
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            let _ = self.log(level, args.to_string());
        }
    }

    /// Stop the hierarchy's dispatch engine.
    ///
    /// Blocks until every message already queued has been written. Affects
    /// every logger sharing the engine; later calls are no-ops.
    pub fn close(&self) {
        self.engine.shutdown();
    }

    /// Like [`close`](Self::close), but waits at most `timeout`.
    ///
    /// Returns `true` if all queued messages were written in time.
    pub fn close_timeout(&self, timeout: Duration) -> bool {
        self.engine.shutdown_timeout(timeout)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.local.name)
            .field("level", &self.local.level)
            .field("local_sinks", &self.local.sinks.len())
            .field("engine", &self.engine)
            .finish()
    }
}

/// Builder for a root logger.
///
/// Options apply in call order; a later call overrides an earlier one for
/// the same setting, except `writer`, which appends.
pub struct LoggerBuilder {
    name: String,
    level: LogLevel,
    mode: WriteMode,
    date_format: String,
    queue_capacity: usize,
    overflow_policy: OverflowPolicy,
    sinks: Vec<Arc<Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            level: DEFAULT_LEVEL,
            mode: WriteMode::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            overflow_policy: OverflowPolicy::default(),
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the level from its name; an unknown name is ignored
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, level: &str) -> Self {
        if let Ok(level) = level.parse() {
            self.level = level;
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the strftime pattern for timestamps; an invalid pattern is ignored
    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if is_valid_date_format(&pattern) {
            self.date_format = pattern;
        }
        self
    }

    /// Capacity of the non-blocking queue (at least 1)
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// What a non-blocking producer does when the queue is full.
    /// Default is [`OverflowPolicy::Drop`].
    #[must_use = "builder methods return a new value"]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Add a shared sink, seen by this logger and all of its children
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, destination: W, format: OutputFormat) -> Self {
        self.sinks.push(Arc::new(Sink::new(destination, format)));
        self
    }

    /// Build the Logger, starting the drain worker in non-blocking mode
    pub fn build(self) -> Logger {
        let mut sinks = self.sinks;
        if sinks.is_empty() {
            sinks.push(Arc::new(Sink::stdout(OutputFormat::default())));
        }

        let shared = SharedConfig {
            mode: self.mode,
            date_format: self.date_format,
            sinks,
            queue_capacity: self.queue_capacity,
            overflow_policy: self.overflow_policy,
        };

        Logger {
            engine: Arc::new(Dispatcher::new(shared)),
            local: LocalConfig {
                name: self.name,
                level: self.level,
                sinks: Arc::from(Vec::new()),
            },
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a child logger; only local settings are reachable here
pub struct LocalBuilder<'a> {
    parent: &'a Logger,
    name: String,
    level: LogLevel,
    extra_sinks: Vec<Arc<Sink>>,
}

impl<'a> LocalBuilder<'a> {
    fn new(parent: &'a Logger) -> Self {
        Self {
            parent,
            name: parent.local.name.clone(),
            level: parent.local.level,
            extra_sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the level from its name; an unknown name is ignored
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, level: &str) -> Self {
        if let Ok(level) = level.parse() {
            self.level = level;
        }
        self
    }

    /// Add a sink only this child (and its own children) writes to
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, destination: W, format: OutputFormat) -> Self {
        self.extra_sinks.push(Arc::new(Sink::new(destination, format)));
        self
    }

    pub fn build(self) -> Logger {
        let sinks: Arc<[Arc<Sink>]> = if self.extra_sinks.is_empty() {
            Arc::clone(&self.parent.local.sinks)
        } else {
            self.parent
                .local
                .sinks
                .iter()
                .cloned()
                .chain(self.extra_sinks)
                .collect()
        };

        Logger {
            engine: Arc::clone(&self.parent.engine),
            local: LocalConfig {
                name: self.name,
                level: self.level,
                sinks,
            },
        }
    }
}
