//! Overflow policies for the non-blocking delivery queue
//!
//! When the bounded queue is full, the policy decides whether the producer
//! drops the message or waits for the drain worker to free a slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Policy for handling queue overflow in non-blocking mode
///
/// # Example
///
/// ```
/// use hierlog::OverflowPolicy;
/// use std::time::Duration;
///
/// // Default behavior: drop silently, never wait
/// let policy = OverflowPolicy::default();
/// assert_eq!(policy, OverflowPolicy::Drop);
///
/// // Wait a little before giving up
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Drop the new message when the queue is full.
    ///
    /// Nothing is reported and nothing is counted; the producer never waits.
    #[default]
    Drop,

    /// Block until space is available
    ///
    /// Warning: This can cause backpressure in the application.
    Block,

    /// Block with timeout, then drop
    BlockWithTimeout(Duration),
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Drop => write!(f, "Drop"),
            OverflowPolicy::Block => write!(f, "Block"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
        }
    }
}
