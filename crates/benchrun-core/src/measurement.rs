//! Final per-case statistic.

use serde::Serialize;

use crate::confidence::{filter_outliers, ConfidenceResult};
use crate::error::BenchError;
use crate::trial::{FrozenTrial, TimingMode};

/// The reported outcome of running one case with one argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Iteration count of the trial the statistic is based on.
    pub iterations: u64,
    /// Iterations left after outlier rejection.
    pub retained_iterations: u64,
    /// Measured time of the retained iterations, in nanoseconds.
    pub total_ns: u64,
    /// Nanoseconds per operation.
    pub ns_per_op: u64,
    /// Bytes processed by the final trial, 0 if not reported.
    pub bytes_processed: u64,
    /// Samples rejected as outliers.
    pub rejected: u64,
    /// Iteration count of every trial, in the order they ran.
    pub trial_iterations: Vec<u64>,
}

impl Measurement {
    /// Build the statistic from the final trial of a search.
    ///
    /// Per-sample trials go through the outlier filter; simple trials are
    /// reported from their aggregate total.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_trial(
        name: &str,
        mode: TimingMode,
        trial: &FrozenTrial,
        trial_iterations: Vec<u64>,
    ) -> Result<Self, BenchError> {
        let (retained_iterations, total_ns, ns_per_op, rejected) = match mode {
            TimingMode::Simple => {
                let total = trial.total_ns as u64;
                let iterations = trial.iterations.max(1);
                (trial.iterations, total, total / iterations, 0)
            }
            TimingMode::PerSample => {
                let confidence: ConfidenceResult = filter_outliers(&trial.samples, trial.total_ns);
                let Some(ns_per_op) = confidence.ns_per_op() else {
                    tracing::warn!(
                        name,
                        submitted = confidence.submitted,
                        "every sample was rejected, no statistic available"
                    );
                    return Err(BenchError::NoSamplesRetained {
                        name: name.to_string(),
                        submitted: confidence.submitted,
                    });
                };
                (
                    confidence.retained_count,
                    confidence.retained_total_ns,
                    ns_per_op,
                    confidence.rejected(),
                )
            }
        };

        Ok(Self {
            iterations: trial.iterations,
            retained_iterations,
            total_ns,
            ns_per_op,
            bytes_processed: trial.bytes_processed,
            rejected,
            trial_iterations,
        })
    }

    /// Throughput in GiB/s, when both time and bytes are positive.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn throughput_gib_per_sec(&self) -> Option<f64> {
        if self.total_ns == 0 || self.bytes_processed == 0 {
            return None;
        }
        let gib_processed = self.bytes_processed as f64 / 1e9;
        let seconds = self.total_ns as f64 / 1e9;
        Some(gib_processed / seconds)
    }
}
