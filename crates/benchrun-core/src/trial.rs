//! Timing controller: one trial of a benchmark body at a fixed iteration count.
//!
//! A benchmark body brackets the code under measurement with
//! [`Trial::start_timing`] and [`Trial::stop_timing`]. Anything outside the
//! brackets (setup, teardown) is not measured. The brackets are lenient:
//! a second start while timing is a no-op, and so is a stop while not
//! timing.

use std::hint::black_box;

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::samples::SampleBuffer;

/// How a trial accumulates the intervals closed by `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimingMode {
    /// Only the running total is kept; no outlier filtering is possible.
    Simple,
    /// Every interval is also stored as a sample for the outlier filter.
    #[default]
    PerSample,
}

/// One attempt to run a benchmark body `iterations` times.
pub struct Trial<'c> {
    clock: &'c dyn Clock,
    mode: TimingMode,
    iterations: u64,
    start_ns: Option<u64>,
    total_ns: f64,
    samples: SampleBuffer,
    bytes_processed: u64,
}

impl<'c> Trial<'c> {
    /// Create an empty trial. Timing is not running.
    #[must_use]
    pub fn new(clock: &'c dyn Clock, mode: TimingMode, iterations: u64) -> Self {
        let limit = match mode {
            TimingMode::Simple => 0,
            TimingMode::PerSample => usize::try_from(iterations).unwrap_or(usize::MAX),
        };
        Self {
            clock,
            mode,
            iterations,
            start_ns: None,
            total_ns: 0.0,
            samples: SampleBuffer::with_limit(limit),
            bytes_processed: 0,
        }
    }

    /// Number of iterations the body is asked to perform.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    #[must_use]
    pub fn mode(&self) -> TimingMode {
        self.mode
    }

    /// Whether a timing window is currently open.
    #[must_use]
    pub fn is_timing(&self) -> bool {
        self.start_ns.is_some()
    }

    /// Open a timing window. Has no effect if one is already open.
    #[inline]
    pub fn start_timing(&mut self) {
        if self.start_ns.is_none() {
            self.start_ns = Some(self.clock.now_ns());
        }
    }

    /// Close the timing window and account for the elapsed interval.
    /// Has no effect if no window is open.
    #[inline]
    pub fn stop_timing(&mut self) {
        self.stop_timing_batch(1);
    }

    /// Close a timing window that covered `ops` operations.
    ///
    /// In per-sample mode the interval is divided by `ops` before it is
    /// recorded, so each sample stays a per-operation time.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn stop_timing_batch(&mut self, ops: u64) {
        let Some(start) = self.start_ns.take() else {
            return;
        };
        let interval = self.clock.now_ns().saturating_sub(start) as f64;
        match self.mode {
            TimingMode::Simple => self.total_ns += interval,
            TimingMode::PerSample => self.record(interval / ops.max(1) as f64),
        }
    }

    fn record(&mut self, sample: f64) {
        if self.samples.push(sample) {
            self.total_ns += sample;
        } else if self.samples.dropped() == 1 {
            tracing::warn!(
                iterations = self.iterations,
                "more timed samples than iterations, extra samples are dropped"
            );
        }
    }

    /// Run `f` once per iteration, timing every call separately.
    pub fn iter<R, F>(&mut self, mut f: F)
    where
        F: FnMut() -> R,
    {
        for _ in 0..self.iterations {
            self.start_timing();
            black_box(f());
            self.stop_timing();
        }
    }

    /// Record how many bytes the whole trial processed, for throughput.
    pub fn set_bytes_processed(&mut self, bytes: u64) {
        self.bytes_processed = bytes;
    }

    /// Total measured time so far, in nanoseconds.
    #[must_use]
    pub fn total_ns(&self) -> f64 {
        self.total_ns
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        self.samples.as_slice()
    }

    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    /// Finish the trial. A window left open by the body is discarded.
    #[must_use]
    pub fn freeze(self) -> FrozenTrial {
        if self.start_ns.is_some() {
            tracing::debug!(
                iterations = self.iterations,
                "timing window still open at end of trial, ignoring it"
            );
        }
        FrozenTrial {
            iterations: self.iterations,
            total_ns: self.total_ns,
            samples: self.samples.into_vec(),
            bytes_processed: self.bytes_processed,
        }
    }
}

/// The immutable outcome of a finished trial.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenTrial {
    pub iterations: u64,
    pub total_ns: f64,
    pub samples: Vec<f64>,
    pub bytes_processed: u64,
}
