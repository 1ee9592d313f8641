//! Built-in benchmark suites.

pub mod bigint;
pub mod math;
pub mod memory;

use benchrun_core::CaseRegistry;

/// Register every built-in suite, in display order.
pub fn register_all(registry: &mut CaseRegistry) {
    registry
        .extend(math::cases())
        .extend(memory::cases())
        .extend(bigint::cases());
}

/// A registry holding every built-in suite.
#[must_use]
pub fn default_registry() -> CaseRegistry {
    let mut registry = CaseRegistry::new();
    register_all(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn display_names_are_unique() {
        let names = default_registry().display_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn every_suite_is_registered() {
        let names = default_registry().display_names();
        for prefix in ["BM_math_", "BM_memcpy", "BM_bigint_"] {
            assert!(names.iter().any(|n| n.starts_with(prefix)), "{prefix}");
        }
    }
}
