//! Result table formatting and JSON reports.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use benchrun_core::error::BenchError;
use benchrun_core::measurement::Measurement;
use benchrun_orchestration::interfaces::CaseReport;

const SI_UNITS: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Render a count with a decimal SI suffix, truncating: `987654 -> "987K"`.
#[must_use]
pub fn pretty_count(value: u64) -> String {
    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < SI_UNITS.len() && value / divisor >= 1000 {
        divisor *= 1000;
        unit += 1;
    }
    format!("{}{}", value / divisor, SI_UNITS[unit])
}

/// The column header line.
#[must_use]
pub fn format_header(name_width: usize) -> String {
    format!("{:<name_width$} {:>10} {:>10}", "", "iterations", "ns/op")
}

/// One result line: name, retained iterations, ns/op, optional throughput.
#[must_use]
pub fn format_measurement(name: &str, m: &Measurement, name_width: usize) -> String {
    let mut line = format!(
        "{name:<name_width$} {:>10} {:>10}",
        pretty_count(m.retained_iterations),
        m.ns_per_op
    );
    if let Some(gib) = m.throughput_gib_per_sec() {
        line.push_str(&format!(" {gib:>8.3} GiB/s"));
    }
    line
}

/// Placeholder line for a case that produced no statistic.
#[must_use]
pub fn format_failure(name: &str, err: &BenchError, name_width: usize) -> String {
    format!(
        "{name:<name_width$} {:>10} {:>10} ({})",
        "-",
        "FAILED",
        failure_reason(err)
    )
}

/// Short reason shown on a failure line.
#[must_use]
pub fn failure_reason(err: &BenchError) -> String {
    match err {
        BenchError::NoSamplesRetained { submitted: 0, .. } => "no timed samples".to_string(),
        BenchError::NoSamplesRetained { submitted, .. } => {
            format!("all {submitted} samples rejected")
        }
        other => other.to_string(),
    }
}

/// Format a report as a table line.
#[must_use]
pub fn format_report(report: &CaseReport, name_width: usize) -> String {
    match &report.outcome {
        Ok(m) => format_measurement(&report.name, m, name_width),
        Err(e) => format_failure(&report.name, e, name_width),
    }
}

/// Serializable form of one report.
#[derive(Debug, Serialize)]
pub struct JsonRecord<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<&'a Measurement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_gib_per_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a CaseReport> for JsonRecord<'a> {
    fn from(report: &'a CaseReport) -> Self {
        match &report.outcome {
            Ok(m) => Self {
                name: &report.name,
                measurement: Some(m),
                throughput_gib_per_sec: m.throughput_gib_per_sec(),
                error: None,
            },
            Err(e) => Self {
                name: &report.name,
                measurement: None,
                throughput_gib_per_sec: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Write every report to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_json_report(path: &Path, reports: &[CaseReport]) -> io::Result<()> {
    let records: Vec<JsonRecord<'_>> = reports.iter().map(JsonRecord::from).collect();
    let content = serde_json::to_string_pretty(&records).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{content}")?;
    tracing::info!(path = %path.display(), reports = reports.len(), "wrote JSON report");
    Ok(())
}
