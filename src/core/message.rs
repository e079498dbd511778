//! Message builder returned by [`Logger::entry`](super::Logger::entry)

use super::log_level::LogLevel;
use super::logger::Logger;
use super::properties::{FieldValue, Properties};
use std::fmt;

/// Key under which [`Message::err`] stores an error description
pub const ERROR_KEY: &str = "error";

/// An in-flight log message.
///
/// Properties accumulate by chaining; [`msg`](Self::msg) or
/// [`msgf`](Self::msgf) set the text and submit. Both consume the builder,
/// so a message can only ever be submitted once.
///
/// # Example
///
/// ```
/// use hierlog::{Logger, LogLevel, MemorySink, OutputFormat};
///
/// let memory = MemorySink::new();
/// let logger = Logger::builder()
///     .name("api")
///     .writer(memory.clone(), OutputFormat::Text)
///     .build();
///
/// let failure = std::io::Error::new(std::io::ErrorKind::Other, "timeout");
/// logger
///     .entry(LogLevel::Warning)
///     .prop("attempt", 3)
///     .err(Some(&failure))
///     .msg("request failed");
///
/// assert!(memory.contents().contains("attempt=3 | error=timeout"));
/// ```
#[must_use = "a message is only logged once `msg` or `msgf` is called"]
pub struct Message<'a> {
    logger: &'a Logger,
    level: LogLevel,
    props: Properties,
}

impl<'a> Message<'a> {
    pub(crate) fn new(logger: &'a Logger, level: LogLevel) -> Self {
        Self {
            logger,
            level,
            props: Properties::new(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Attach a property
    pub fn prop<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.props.insert(key, value);
        self
    }

    /// Attach several properties at once
    pub fn props<I, K, V>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        for (key, value) in props {
            self.props.insert(key, value);
        }
        self
    }

    /// Record an error's description under the `error` key; `None` leaves
    /// the message untouched.
    pub fn err<E>(mut self, err: Option<&E>) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        if let Some(err) = err {
            self.props.insert(ERROR_KEY, err.to_string());
        }
        self
    }

    /// Set the text and submit
    pub fn msg(self, text: impl AsRef<str>) {
        let _ = self.logger.submit(self.level, text.as_ref(), self.props);
    }

    /// Format the text and submit
    pub fn msgf(self, args: fmt::Arguments<'_>) {
        if !self.logger.enabled(self.level) {
            return;
        }
        let text = args.to_string();
        self.msg(text);
    }
}

impl fmt::Debug for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("logger", &self.logger.name())
            .field("level", &self.level)
            .field("props", &self.props)
            .finish()
    }
}
