//! Adaptive driver options.

use std::time::Duration;

use crate::constants::{DEFAULT_MAX_GROWTH, DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_NS};

/// Options controlling the iteration-count search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Cumulative measured time (ns) that finalizes a trial.
    pub target_ns: u64,
    /// The search stops before attempting this many iterations.
    pub max_iterations: u64,
    /// Maximum growth factor between consecutive trials.
    pub max_growth: u64,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            target_ns: DEFAULT_TARGET_NS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_growth: DEFAULT_MAX_GROWTH,
        }
    }
}

impl DriverOptions {
    /// Options with a custom duration threshold.
    #[must_use]
    pub fn with_target(target: Duration) -> Self {
        Self {
            target_ns: u64::try_from(target.as_nanos()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.target_ns == 0 {
            self.target_ns = DEFAULT_TARGET_NS;
        }
        if self.max_iterations == 0 {
            self.max_iterations = DEFAULT_MAX_ITERATIONS;
        }
        if self.max_growth < 2 {
            self.max_growth = DEFAULT_MAX_GROWTH;
        }
        self
    }
}
