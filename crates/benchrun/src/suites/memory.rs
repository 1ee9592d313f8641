//! Memory copy, fill and compare over buffers of increasing size.
//!
//! These cases bracket the whole loop once per trial and report the bytes
//! touched, so their lines carry a throughput column.

use std::hint::black_box;

use benchrun_core::{Arg, BenchmarkCase, TimingMode, Trial};

/// Buffer sizes in bytes.
pub const SIZES: [i64; 8] = [8, 64, 512, 1024, 8 * 1024, 16 * 1024, 32 * 1024, 64 * 1024];

fn size_of(arg: Arg) -> usize {
    arg.as_int().and_then(|n| usize::try_from(n).ok()).unwrap_or(0)
}

/// Time `iterations` calls of `op` as one interval and record the bytes.
fn run_bulk(trial: &mut Trial<'_>, bytes_per_op: usize, mut op: impl FnMut()) {
    let iterations = trial.iterations();
    trial.start_timing();
    for _ in 0..iterations {
        op();
    }
    trial.stop_timing();
    trial.set_bytes_processed(iterations.saturating_mul(bytes_per_op as u64));
}

pub fn cases() -> Vec<BenchmarkCase> {
    vec![
        BenchmarkCase::new("BM_memcpy", |trial, arg| {
            let size = size_of(arg);
            let src = vec![0x5Au8; size];
            let mut dst = vec![0u8; size];
            run_bulk(trial, size, || {
                dst.copy_from_slice(black_box(&src));
                black_box(&mut dst);
            });
        })
        .with_int_args(SIZES)
        .with_mode(TimingMode::Simple),
        BenchmarkCase::new("BM_memset", |trial, arg| {
            let size = size_of(arg);
            let mut dst = vec![0u8; size];
            run_bulk(trial, size, || {
                dst.fill(black_box(0xA5));
                black_box(&mut dst);
            });
        })
        .with_int_args(SIZES)
        .with_mode(TimingMode::Simple),
        BenchmarkCase::new("BM_memcmp", |trial, arg| {
            let size = size_of(arg);
            let lhs = vec![0x11u8; size];
            let rhs = lhs.clone();
            run_bulk(trial, size, || {
                black_box(black_box(&lhs) == black_box(&rhs));
            });
        })
        .with_int_args(SIZES)
        .with_mode(TimingMode::Simple),
    ]
}
