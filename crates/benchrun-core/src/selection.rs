//! Name-based selection of benchmarks.

use regex::Regex;

use crate::error::BenchError;

/// A compiled pattern tested against display names.
pub trait NamePattern {
    fn is_match(&self, name: &str) -> bool;
}

impl NamePattern for Regex {
    fn is_match(&self, name: &str) -> bool {
        Regex::is_match(self, name)
    }
}

/// Ordered set of patterns. An empty set selects everything.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    patterns: Vec<Regex>,
}

impl Selection {
    /// A selection that matches every name.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from already compiled patterns.
    #[must_use]
    pub fn new(patterns: Vec<Regex>) -> Self {
        Self { patterns }
    }

    /// Compile each pattern, failing on the first invalid one.
    pub fn parse<I, S>(patterns: I) -> Result<Self, BenchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| BenchError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `name` should run: no patterns, or any pattern matches.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        should_run(&self.patterns, name)
    }
}

/// True if `patterns` is empty or at least one of them matches `name`.
pub fn should_run<P: NamePattern>(patterns: &[P], name: &str) -> bool {
    patterns.is_empty() || patterns.iter().any(|p| p.is_match(name))
}
