//! The run-all loop.
//!
//! Cases run one at a time, in registration order, on the calling thread.
//! Concurrent cases would share the CPU with each other and skew the
//! wall-clock samples of both.

use benchrun_core::clock::Clock;
use benchrun_core::driver::AdaptiveDriver;
use benchrun_core::error::BenchError;
use benchrun_core::options::DriverOptions;
use benchrun_core::registry::CaseRegistry;
use benchrun_core::selection::Selection;

use crate::interfaces::{CaseReport, ResultPresenter};

/// State local to one run-all invocation.
struct RunContext {
    header_printed: bool,
    name_width: usize,
}

impl RunContext {
    fn new(name_width: usize) -> Self {
        Self {
            header_printed: false,
            name_width,
        }
    }

    fn print_header_once(&mut self, presenter: &mut dyn ResultPresenter) -> std::io::Result<()> {
        if !self.header_printed {
            presenter.present_header(self.name_width)?;
            self.header_printed = true;
        }
        Ok(())
    }
}

/// Everything one run-all invocation produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One report per executed (case, argument) pair, in run order.
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    /// Number of (case, argument) pairs that ran.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.reports.len()
    }

    /// Number of pairs that ran but produced no statistic.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }
}

/// Run every selected (case, argument) pair and present each result as
/// soon as it is available.
///
/// A case whose statistics degenerate is reported as a failure and the run
/// continues. Only presenter I/O errors abort the run.
pub fn run_all(
    registry: &CaseRegistry,
    selection: &Selection,
    clock: &dyn Clock,
    options: &DriverOptions,
    presenter: &mut dyn ResultPresenter,
) -> Result<RunSummary, BenchError> {
    let mut ctx = RunContext::new(registry.max_name_width());
    let driver = AdaptiveDriver::new(clock, options.clone());
    let mut summary = RunSummary::default();

    for case in registry {
        for &arg in case.args() {
            let name = case.display_name(arg);
            if !selection.matches(&name) {
                tracing::trace!(name = %name, "not selected");
                continue;
            }

            ctx.print_header_once(presenter)?;
            tracing::debug!(name = %name, "running benchmark");
            let outcome = driver.run(case, arg);
            if let Err(e) = &outcome {
                tracing::warn!(name = %name, error = %e, "benchmark produced no result");
            }

            let report = CaseReport { name, outcome };
            presenter.present_report(&report, ctx.name_width)?;
            summary.reports.push(report);
        }
    }

    tracing::info!(
        run = summary.run_count(),
        failed = summary.failed_count(),
        "run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::rc::Rc;

    use super::*;
    use benchrun_core::clock::ManualClock;
    use benchrun_core::BenchmarkCase;

    #[derive(Default)]
    struct Recorder {
        headers: Vec<usize>,
        names: Vec<String>,
    }

    impl ResultPresenter for Recorder {
        fn present_header(&mut self, name_width: usize) -> io::Result<()> {
            self.headers.push(name_width);
            Ok(())
        }

        fn present_report(&mut self, report: &CaseReport, _name_width: usize) -> io::Result<()> {
            self.names.push(report.name.clone());
            Ok(())
        }
    }

    fn fixed_cost(clock: &Rc<ManualClock>, name: &str, cost: u64) -> BenchmarkCase {
        let clock = Rc::clone(clock);
        BenchmarkCase::new(name, move |trial, _| trial.iter(|| clock.advance(cost)))
    }

    fn quick() -> DriverOptions {
        DriverOptions {
            target_ns: 1_000_000,
            ..DriverOptions::default()
        }
    }

    #[test]
    fn runs_selected_cases_in_order() {
        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry
            .register(fixed_cost(&clock, "Foo", 1_000).with_int_args([1, 2]))
            .register(fixed_cost(&clock, "Bar", 1_000));

        let mut recorder = Recorder::default();
        let summary = run_all(
            &registry,
            &Selection::all(),
            clock.as_ref(),
            &quick(),
            &mut recorder,
        )
        .unwrap();

        assert_eq!(summary.run_count(), 3);
        assert_eq!(summary.failed_count(), 0);
        assert_eq!(recorder.names, ["Foo/01", "Foo/02", "Bar"]);
        assert_eq!(recorder.headers, [20]);
    }

    #[test]
    fn pattern_filters_cases() {
        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry
            .register(fixed_cost(&clock, "Foo", 1_000).with_int_args([1]))
            .register(fixed_cost(&clock, "Bar", 1_000));

        let mut recorder = Recorder::default();
        let sel = Selection::parse(["^Foo"]).unwrap();
        let summary = run_all(&registry, &sel, clock.as_ref(), &quick(), &mut recorder).unwrap();
        assert_eq!(summary.run_count(), 1);
        assert_eq!(recorder.names, ["Foo/01"]);
    }

    #[test]
    fn no_match_prints_no_header() {
        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry.register(fixed_cost(&clock, "Foo", 1_000));

        let mut recorder = Recorder::default();
        let sel = Selection::parse(["^Nope"]).unwrap();
        let summary = run_all(&registry, &sel, clock.as_ref(), &quick(), &mut recorder).unwrap();
        assert_eq!(summary.run_count(), 0);
        assert!(recorder.headers.is_empty());
    }

    #[test]
    fn header_printed_once_per_invocation() {
        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry.register(fixed_cost(&clock, "Foo", 1_000));

        let mut recorder = Recorder::default();
        for _ in 0..2 {
            run_all(
                &registry,
                &Selection::all(),
                clock.as_ref(),
                &quick(),
                &mut recorder,
            )
            .unwrap();
        }
        assert_eq!(recorder.headers.len(), 2);
    }

    #[test]
    fn degenerate_case_does_not_abort_run() {
        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry
            .register(BenchmarkCase::new("Untimed", |_, _| {}))
            .register(fixed_cost(&clock, "Timed", 1_000));

        let mut recorder = Recorder::default();
        let summary = run_all(
            &registry,
            &Selection::all(),
            clock.as_ref(),
            &quick(),
            &mut recorder,
        )
        .unwrap();
        assert_eq!(summary.run_count(), 2);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(recorder.names, ["Untimed", "Timed"]);
    }

    #[test]
    fn presenter_error_aborts_run() {
        struct Broken;
        impl ResultPresenter for Broken {
            fn present_header(&mut self, _: usize) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn present_report(&mut self, _: &CaseReport, _: usize) -> io::Result<()> {
                Ok(())
            }
        }

        let clock = Rc::new(ManualClock::default());
        let mut registry = CaseRegistry::new();
        registry.register(fixed_cost(&clock, "Foo", 1_000));
        let err = run_all(
            &registry,
            &Selection::all(),
            clock.as_ref(),
            &quick(),
            &mut Broken,
        )
        .unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }
}
