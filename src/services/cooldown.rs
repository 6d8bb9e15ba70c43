//! Process-wide rate limit for image posts.
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::constants::IMAGE_COOLDOWN;

/// Timestamp of the last accepted image request. Check and reserve happen under one lock so
/// two interleaved requests can never both pass inside the window.
#[derive(Debug)]
pub struct CooldownGate {
    window: Duration,
    last_accepted: Mutex<Option<Instant>>,
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(IMAGE_COOLDOWN)
    }
}

impl CooldownGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: Mutex::new(None),
        }
    }

    /// Returns `false` when `now` falls within the window of the last accepted request
    /// (boundary inclusive). Otherwise records `now` as accepted and returns `true`.
    pub fn check_and_reserve(&self, now: Instant) -> bool {
        let mut last = self.last_accepted.lock();
        if let Some(prev) = *last
            && now.saturating_duration_since(prev) <= self.window
        {
            return false;
        }
        *last = Some(now);
        true
    }

    pub fn last_accepted(&self) -> Option<Instant> {
        *self.last_accepted.lock()
    }
}
