//! Adaptive iteration driver.
//!
//! Runs a case with a geometrically growing iteration count until one
//! trial accumulates the target measured time, then hands that trial's
//! samples to the confidence engine.
//!
//! Growth per step is `max(n + 1, min(1.5 * projected, 100 * n))`, rounded
//! up to a 1-2-5 value, where `projected` is the count that would reach the
//! target at the observed per-iteration rate. The search gives up growing
//! once the next guess reaches the iteration ceiling and keeps the last
//! trial it ran.

use crate::case::{Arg, BenchmarkCase};
use crate::clock::Clock;
use crate::error::BenchError;
use crate::measurement::Measurement;
use crate::options::DriverOptions;
use crate::rounding::round_iterations;
use crate::trial::{FrozenTrial, Trial};

/// Outcome of the iteration-count search, before statistics.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The trial the statistic will be based on.
    pub trial: FrozenTrial,
    /// Iteration count of every trial, in the order they ran.
    pub trial_iterations: Vec<u64>,
    /// Whether the final trial reached the target time.
    pub reached_target: bool,
}

/// Drives trials of a case against a clock.
pub struct AdaptiveDriver<'c> {
    clock: &'c dyn Clock,
    options: DriverOptions,
}

impl<'c> AdaptiveDriver<'c> {
    #[must_use]
    pub fn new(clock: &'c dyn Clock, options: DriverOptions) -> Self {
        Self {
            clock,
            options: options.normalize(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Search for an iteration count, then filter and summarize.
    pub fn run(&self, case: &BenchmarkCase, arg: Arg) -> Result<Measurement, BenchError> {
        let outcome = self.search(case, arg);
        let name = case.display_name(arg);
        let measurement = Measurement::from_trial(
            &name,
            case.mode(),
            &outcome.trial,
            outcome.trial_iterations,
        )?;
        tracing::debug!(
            name = %name,
            iterations = measurement.iterations,
            retained = measurement.retained_iterations,
            ns_per_op = measurement.ns_per_op,
            "benchmark finished"
        );
        Ok(measurement)
    }

    /// Run trials with growing iteration counts. Only the last trial is kept.
    #[allow(clippy::cast_precision_loss)]
    pub fn search(&self, case: &BenchmarkCase, arg: Arg) -> SearchOutcome {
        let target = self.options.target_ns as f64;
        let mut trial_iterations = Vec::new();
        let mut next = 1;

        loop {
            let iterations = next;
            let mut trial = Trial::new(self.clock, case.mode(), iterations);
            case.run(&mut trial, arg);
            let trial = trial.freeze();
            trial_iterations.push(iterations);

            tracing::debug!(
                name = case.name(),
                iterations,
                total_ns = trial.total_ns,
                "trial complete"
            );

            if trial.total_ns >= target {
                return SearchOutcome {
                    trial,
                    trial_iterations,
                    reached_target: true,
                };
            }

            next = next_iterations(iterations, trial.total_ns, &self.options);
            if next >= self.options.max_iterations {
                tracing::debug!(
                    name = case.name(),
                    iterations,
                    next,
                    "iteration ceiling reached before target time"
                );
                return SearchOutcome {
                    trial,
                    trial_iterations,
                    reached_target: false,
                };
            }
        }
    }
}

/// Next iteration count after a trial of `iterations` took `total_ns`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn next_iterations(iterations: u64, total_ns: f64, options: &DriverOptions) -> u64 {
    let iterations = iterations.max(1);
    let per_iteration = (total_ns as u64) / iterations;
    let projected = if per_iteration == 0 {
        options.target_ns
    } else {
        options.target_ns / per_iteration
    };
    let grown = projected
        .saturating_add(projected / 2)
        .min(iterations.saturating_mul(options.max_growth));
    round_iterations(grown.max(iterations + 1))
}
