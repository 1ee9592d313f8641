//! Constants for the timing engine and process exit codes.

/// Cumulative measured time a trial must reach before its samples are final.
pub const DEFAULT_TARGET_NS: u64 = 1_000_000_000;

/// Upper bound on the iteration count of a single trial guess.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100_000_000;

/// Maximum factor by which the iteration count may grow between trials.
pub const DEFAULT_MAX_GROWTH: u64 = 100;

/// Half-width of the confidence band, in standard deviations.
pub const CONFIDENCE_SIGMAS: f64 = 2.0;

/// Minimum width of the name column in the result table.
pub const MIN_NAME_COLUMN_WIDTH: usize = 20;

/// Width used when rendering integer arguments in display names.
pub const INT_ARG_WIDTH: usize = 2;

/// Digits after the decimal point for floating-point arguments.
pub const FLOAT_ARG_PRECISION: usize = 6;

/// Samples reserved up front when a trial's full sample buffer cannot be
/// allocated at once. The buffer then grows during the trial.
pub const SAMPLE_PREALLOC_LIMIT: usize = 1 << 20;

/// Process exit codes.
pub mod exit_codes {
    /// Every selected benchmark produced a result.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// No benchmark matched the selection patterns.
    pub const ERROR_NO_MATCH: i32 = 2;
    /// Invalid configuration (bad pattern or flag value).
    pub const ERROR_CONFIG: i32 = 4;
    /// At least one benchmark had every sample rejected.
    pub const ERROR_DEGENERATE: i32 = 5;
}
