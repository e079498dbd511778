//! Termination signal raised by fatal-level messages

use std::any::Any;
use std::fmt;

/// Panic payload raised after a fatal-level message has been delivered.
///
/// It is distinct from every recoverable error: logging calls never return
/// it, they unwind with it. Code that needs to assert on it (tests, a
/// supervisor thread) can recover it from a `catch_unwind` payload with
/// [`FatalSignal::from_panic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalSignal {
    pub logger: String,
    pub message: String,
}

impl FatalSignal {
    pub fn new(logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            message: message.into(),
        }
    }

    /// Raise the signal. Never returns.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }

    /// Extract the signal from a panic payload, if that is what it carries
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<&FatalSignal> {
        payload.downcast_ref::<FatalSignal>()
    }
}

impl fmt::Display for FatalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal in '{}': {}", self.logger, self.message)
    }
}
