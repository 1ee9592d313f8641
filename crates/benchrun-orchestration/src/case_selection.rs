//! Case selection logic.

use benchrun_core::registry::CaseRegistry;
use benchrun_core::selection::Selection;

/// Display names that `selection` would run, in registration order.
#[must_use]
pub fn selected_names(registry: &CaseRegistry, selection: &Selection) -> Vec<String> {
    registry
        .display_names()
        .into_iter()
        .filter(|name| selection.matches(name))
        .collect()
}

/// Base names of every registered case.
#[must_use]
pub fn available_names(registry: &CaseRegistry) -> Vec<&str> {
    registry.iter().map(|case| case.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchrun_core::BenchmarkCase;

    fn registry() -> CaseRegistry {
        let mut registry = CaseRegistry::new();
        registry
            .register(BenchmarkCase::new("Foo", |_, _| {}).with_int_args([1]))
            .register(BenchmarkCase::new("Bar", |_, _| {}));
        registry
    }

    #[test]
    fn select_all() {
        let names = selected_names(&registry(), &Selection::all());
        assert_eq!(names, ["Foo/01", "Bar"]);
    }

    #[test]
    fn select_by_prefix() {
        let sel = Selection::parse(["^Foo"]).unwrap();
        assert_eq!(selected_names(&registry(), &sel), ["Foo/01"]);
    }

    #[test]
    fn select_none() {
        let sel = Selection::parse(["^Baz"]).unwrap();
        assert!(selected_names(&registry(), &sel).is_empty());
    }

    #[test]
    fn available_lists_base_names() {
        let registry = registry();
        assert_eq!(available_names(&registry), ["Foo", "Bar"]);
    }
}
