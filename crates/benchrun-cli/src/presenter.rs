//! Table presenter.

use std::io::{self, Write};

use benchrun_orchestration::interfaces::{CaseReport, ResultPresenter};

use crate::output::{format_header, format_report};

/// Writes the header and one line per result, flushing after every line so
/// progress is visible while later cases are still running.
pub struct TablePresenter<W: Write> {
    out: W,
}

impl TablePresenter<io::Stdout> {
    /// Presenter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TablePresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for TablePresenter<W> {
    fn present_header(&mut self, name_width: usize) -> io::Result<()> {
        writeln!(self.out, "{}", format_header(name_width))?;
        self.out.flush()
    }

    fn present_report(&mut self, report: &CaseReport, name_width: usize) -> io::Result<()> {
        writeln!(self.out, "{}", format_report(report, name_width))?;
        self.out.flush()
    }
}
