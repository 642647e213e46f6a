//! Wall-clock access point.
//!
//! Every operation that needs "now" goes through a [`Clock`] so tests can pin
//! time with [`MockClock`] instead of racing the system clock.

use chrono::{DateTime, FixedOffset, Local};
use std::sync::Mutex;

/// An instant carrying its own UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Source of the current time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current instant.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the operating system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }
}

/// Clock returning a settable instant.
#[derive(Debug)]
pub struct MockClock {
    now: Mutex<Timestamp>,
}

impl MockClock {
    pub fn new(now: Timestamp) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Move the clock to `now`.
    pub fn set(&self, now: Timestamp) {
        if let Ok(mut current) = self.now.lock() {
            *current = now;
        }
    }

    /// Shift the clock by `delta`, backwards when negative.
    pub fn advance(&self, delta: chrono::Duration) {
        if let Ok(mut current) = self.now.lock() {
            *current += delta;
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
