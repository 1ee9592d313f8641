//! Error type shared by the engine and its callers.

/// Error type for benchmark selection, execution and reporting.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A selection pattern could not be compiled.
    #[error("couldn't compile \"{pattern}\" as a regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The outlier filter rejected every sample of a trial.
    #[error("{name}: all {submitted} samples rejected as outliers")]
    NoSamplesRetained { name: String, submitted: usize },

    /// No registered benchmark matched the selection.
    #[error("no matching benchmarks")]
    NoMatches,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing a report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Whether this error is a per-case statistics failure rather than a
    /// failure of the whole run.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::NoSamplesRetained { .. })
    }
}
