//! CanvasDiscovery - bounded polling for the hero canvas
//!
//! The canvas may be inserted after the document is ready, so the lookup is
//! retried on a timer a fixed number of times before giving up quietly.

use crate::config::DiscoveryConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discovery {
    /// The canvas is there; go ahead and start.
    Start,
    /// Not found yet; look again after this many milliseconds.
    RetryAfter(u32),
    /// Out of attempts. Final: later lookups are ignored.
    GiveUp,
    /// The background is already running; ignore the lookup.
    AlreadyStarted,
}

#[derive(Clone, Debug)]
pub struct CanvasDiscovery {
    attempt: u32,
    max_attempts: u32,
    retry_delay_ms: u32,
    given_up: bool,
}

impl CanvasDiscovery {
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_attempts,
            retry_delay_ms: config.retry_delay_ms,
            given_up: false,
        }
    }

    /// Index of the lookup about to be judged.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Judge one lookup. Attempts run from 0 to `max_attempts` inclusive.
    pub fn next(&mut self, found: bool) -> Discovery {
        if self.given_up {
            return Discovery::GiveUp;
        }
        if found {
            return Discovery::Start;
        }
        if self.attempt >= self.max_attempts {
            self.given_up = true;
            return Discovery::GiveUp;
        }
        self.attempt += 1;
        Discovery::RetryAfter(self.retry_delay_ms)
    }
}
