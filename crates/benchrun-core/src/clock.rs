//! Monotonic nanosecond clock sources.
//!
//! `MonotonicClock` is the production source. `ManualClock` only moves when
//! told to, which makes the driver and the outlier filter reproducible.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic source of nanosecond timestamps.
pub trait Clock {
    /// Current timestamp in nanoseconds. Never decreases between calls.
    fn now_ns(&self) -> u64;
}

/// Clock backed by [`Instant`], measured from the moment it was created.
///
/// Unaffected by wall-clock adjustments.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose zero is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        let nanos = self.origin.elapsed().as_nanos();
        match u64::try_from(nanos) {
            Ok(ns) => ns,
            Err(_) => clock_unavailable(nanos),
        }
    }
}

/// A timestamp we cannot represent would silently corrupt every measurement
/// taken after it, so the process stops here.
#[cold]
fn clock_unavailable(nanos: u128) -> ! {
    tracing::error!(nanos, "monotonic clock out of range, aborting");
    eprintln!("benchrun: monotonic clock unavailable ({nanos} ns out of range)");
    std::process::abort()
}

/// Clock that only advances when [`ManualClock::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock reading `start` nanoseconds.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `ns` nanoseconds.
    pub fn advance(&self, ns: u64) {
        self.now.set(self.now.get().saturating_add(ns));
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.get()
    }
}
