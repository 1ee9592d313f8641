//! Orchestration interfaces.

use std::io;

use benchrun_core::error::BenchError;
use benchrun_core::measurement::Measurement;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present the column header. Called at most once per run.
    fn present_header(&mut self, name_width: usize) -> io::Result<()>;

    /// Present the outcome of one (case, argument) pair.
    fn present_report(&mut self, report: &CaseReport, name_width: usize) -> io::Result<()>;
}

/// Outcome of running one case with one argument.
#[derive(Debug)]
pub struct CaseReport {
    /// Display name (`name` or `name/arg`).
    pub name: String,
    /// The measurement or a per-case failure.
    pub outcome: Result<Measurement, BenchError>,
}

impl CaseReport {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_header(&mut self, _name_width: usize) -> io::Result<()> {
        Ok(())
    }

    fn present_report(&mut self, _report: &CaseReport, _name_width: usize) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_presenter() {
        let mut presenter = NullPresenter;
        presenter.present_header(20).unwrap();
        let report = CaseReport {
            name: "BM_x".into(),
            outcome: Err(BenchError::NoSamplesRetained {
                name: "BM_x".into(),
                submitted: 0,
            }),
        };
        presenter.present_report(&report, 20).unwrap();
        assert!(report.is_failure());
    }
}
