//! Caller-owned registry of benchmark cases.

use crate::case::BenchmarkCase;
use crate::constants::MIN_NAME_COLUMN_WIDTH;

/// Ordered list of benchmark cases. Iteration follows registration order.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    cases: Vec<BenchmarkCase>,
}

impl CaseRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a case.
    pub fn register(&mut self, case: BenchmarkCase) -> &mut Self {
        tracing::trace!(name = case.name(), "registered benchmark");
        self.cases.push(case);
        self
    }

    /// Append several cases, keeping their order.
    pub fn extend(&mut self, cases: impl IntoIterator<Item = BenchmarkCase>) -> &mut Self {
        for case in cases {
            self.register(case);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkCase> {
        self.cases.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Every display name, case by case and argument by argument.
    #[must_use]
    pub fn display_names(&self) -> Vec<String> {
        self.cases
            .iter()
            .flat_map(|case| case.args().iter().map(|&arg| case.display_name(arg)))
            .collect()
    }

    /// Width of the name column: the longest display name, at least 20.
    #[must_use]
    pub fn max_name_width(&self) -> usize {
        self.cases
            .iter()
            .map(BenchmarkCase::name_column_width)
            .fold(MIN_NAME_COLUMN_WIDTH, usize::max)
    }
}

impl<'a> IntoIterator for &'a CaseRegistry {
    type Item = &'a BenchmarkCase;
    type IntoIter = std::slice::Iter<'a, BenchmarkCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
