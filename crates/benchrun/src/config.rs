//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use benchrun_core::constants::DEFAULT_MAX_ITERATIONS;
use benchrun_core::{BenchError, DriverOptions};

/// benchrun: run microbenchmarks with adaptive iteration counts and
/// outlier rejection.
#[derive(Parser, Debug)]
#[command(name = "benchrun", version, about)]
pub struct AppConfig {
    /// Regular expressions selecting benchmarks by display name (all if none).
    pub patterns: Vec<String>,

    /// List the selected benchmark names without running them.
    #[arg(short, long)]
    pub list: bool,

    /// Measured time that finalizes a trial (e.g. "1s", "250ms").
    #[arg(short, long, default_value = "1s", env = "BENCHRUN_TARGET_TIME")]
    pub target_time: String,

    /// Iteration ceiling for the adaptive search.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u64,

    /// Pin the process to this CPU before running.
    #[arg(long, env = "BENCHRUN_CPU")]
    pub cpu: Option<usize>,

    /// Also write every result to this JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the target time flag.
    pub fn target_duration(&self) -> Result<Duration, BenchError> {
        match parse_duration(&self.target_time) {
            Some(d) if !d.is_zero() => Ok(d),
            _ => Err(BenchError::Config(format!(
                "invalid target time \"{}\"",
                self.target_time
            ))),
        }
    }

    /// Driver options built from the flags.
    pub fn driver_options(&self) -> Result<DriverOptions, BenchError> {
        if self.max_iterations < 2 {
            return Err(BenchError::Config(format!(
                "max iterations must be at least 2, got {}",
                self.max_iterations
            )));
        }
        let mut options = DriverOptions::with_target(self.target_duration()?);
        options.max_iterations = self.max_iterations;
        Ok(options)
    }
}

/// Parse a duration string like "500ms", "2s", "1m" or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(us) = s.strip_suffix("us") {
        let n: u64 = us.parse().ok()?;
        Some(Duration::from_micros(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
