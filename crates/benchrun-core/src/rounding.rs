//! Rounding of candidate iteration counts to human-friendly values.

/// Round `n` up to the next value of the form 1, 2 or 5 times a power of ten.
///
/// `round_iterations(3) == 5`, `round_iterations(120) == 200`,
/// `round_iterations(500) == 500`.
#[must_use]
pub fn round_iterations(n: u64) -> u64 {
    let mut base: u64 = 1;
    while base.saturating_mul(10) < n {
        base *= 10;
    }
    if n <= base {
        base
    } else if n <= base.saturating_mul(2) {
        base.saturating_mul(2)
    } else if n <= base.saturating_mul(5) {
        base.saturating_mul(5)
    } else {
        base.saturating_mul(10)
    }
}
