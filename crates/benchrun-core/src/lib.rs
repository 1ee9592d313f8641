//! # benchrun-core
//!
//! Timing engine for the benchrun microbenchmark harness: a monotonic clock,
//! trials bracketed by start/stop timing calls, an adaptive iteration-count
//! search, and single-pass ±2σ outlier rejection.

pub mod case;
pub mod clock;
pub mod confidence;
pub mod constants;
pub mod driver;
pub mod error;
pub mod measurement;
pub mod options;
pub mod registry;
pub mod rounding;
pub(crate) mod samples;
pub mod selection;
pub mod trial;

// Re-exports
pub use case::{Arg, BenchFn, BenchmarkCase};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use confidence::{filter_outliers, ConfidenceResult};
pub use constants::exit_codes;
pub use driver::{AdaptiveDriver, SearchOutcome};
pub use error::BenchError;
pub use measurement::Measurement;
pub use options::DriverOptions;
pub use registry::CaseRegistry;
pub use selection::{NamePattern, Selection};
pub use trial::{FrozenTrial, TimingMode, Trial};
