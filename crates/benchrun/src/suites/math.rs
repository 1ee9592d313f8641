//! Floating-point and integer arithmetic.

use std::hint::black_box;

use benchrun_core::BenchmarkCase;

/// Exponents passed to the `powf` case.
pub const POW_EXPONENTS: [f64; 3] = [0.5, 2.0, 3.7];

/// Indices passed to the Fibonacci case.
pub const FIB_INDICES: [i64; 3] = [10, 50, 90];

/// Iterative Fibonacci, exact for `n <= 93`.
#[must_use]
pub fn fib_u64(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

pub fn cases() -> Vec<BenchmarkCase> {
    vec![
        BenchmarkCase::new("BM_math_sqrt", |trial, _| {
            trial.iter(|| black_box(2.0f64).sqrt());
        }),
        BenchmarkCase::new("BM_math_log10", |trial, _| {
            trial.iter(|| black_box(1234.5f64).log10());
        }),
        BenchmarkCase::new("BM_math_powf", |trial, arg| {
            let exponent = arg.as_float().unwrap_or(1.0);
            trial.iter(|| black_box(1.5f64).powf(black_box(exponent)));
        })
        .with_float_args(POW_EXPONENTS),
        BenchmarkCase::new("BM_math_fib_u64", |trial, arg| {
            let n = arg.as_int().and_then(|n| u64::try_from(n).ok()).unwrap_or(0);
            trial.iter(|| fib_u64(black_box(n)));
        })
        .with_int_args(FIB_INDICES),
    ]
}
