//! Confidence engine: single-pass outlier rejection.
//!
//! The mean and population standard deviation are computed once over all
//! samples. Samples strictly inside `mean ± 2σ` are kept, everything else
//! is dropped. Mean and σ are not recomputed after pruning.

use crate::constants::CONFIDENCE_SIGMAS;

/// Statistics left after outlier rejection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceResult {
    /// Samples handed to the filter.
    pub submitted: usize,
    /// Samples inside the confidence band.
    pub retained_count: u64,
    /// Sum of the retained samples, each truncated to whole nanoseconds.
    pub retained_total_ns: u64,
    /// Mean over all submitted samples.
    pub mean_ns: f64,
    /// Population standard deviation over all submitted samples.
    pub sigma_ns: f64,
}

impl ConfidenceResult {
    /// Integer nanoseconds per operation, or `None` when nothing was retained.
    #[must_use]
    pub fn ns_per_op(&self) -> Option<u64> {
        self.retained_total_ns.checked_div(self.retained_count)
    }

    /// Number of samples discarded as outliers.
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.submitted as u64 - self.retained_count
    }
}

/// Reject samples outside the ±2σ band around the mean.
///
/// `total_ns` is the trial's accumulated total, which is the sum of
/// `samples`. When every sample is identical (σ = 0) all of them are kept.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn filter_outliers(samples: &[f64], total_ns: f64) -> ConfidenceResult {
    if samples.is_empty() {
        return ConfidenceResult {
            submitted: 0,
            retained_count: 0,
            retained_total_ns: 0,
            mean_ns: 0.0,
            sigma_ns: 0.0,
        };
    }

    let n = samples.len() as f64;
    let mean = total_ns / n;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let sigma = variance.sqrt();

    let (retained_count, retained_total_ns) = if sigma == 0.0 {
        let total = samples
            .iter()
            .fold(0u64, |total, &s| total.saturating_add(s as u64));
        (samples.len() as u64, total)
    } else {
        let low = mean - CONFIDENCE_SIGMAS * sigma;
        let high = mean + CONFIDENCE_SIGMAS * sigma;
        samples
            .iter()
            .filter(|&&s| s > low && s < high)
            .fold((0u64, 0u64), |(count, total), &s| {
                (count + 1, total.saturating_add(s as u64))
            })
    };

    tracing::trace!(
        submitted = samples.len(),
        retained = retained_count,
        mean,
        sigma,
        "confidence band applied"
    );

    ConfidenceResult {
        submitted: samples.len(),
        retained_count,
        retained_total_ns,
        mean_ns: mean,
        sigma_ns: sigma,
    }
}
