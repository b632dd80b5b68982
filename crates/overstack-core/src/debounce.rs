#![forbid(unsafe_code)]

//! Trailing-edge debouncer driven by host time.
//!
//! Every [`Debouncer::signal`] restarts the wait. [`Debouncer::poll`] reports
//! `true` exactly once, after the signal stream has been quiet for the full
//! wait measured from the last signal.

use std::time::Duration;

/// Default quiet period for resize reactions.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Restartable fire-once timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    /// Create an idle debouncer with the given quiet period.
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record a signal at `now`, restarting the wait.
    pub fn signal(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.wait));
    }

    /// Fire if the wait has elapsed since the last signal.
    ///
    /// Returns `true` at most once per quiet period.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// When the pending fire is due, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
