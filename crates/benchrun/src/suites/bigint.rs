//! Arbitrary-precision arithmetic on operands of increasing bit length.

use std::hint::black_box;

use num_bigint::BigUint;

use benchrun_core::{Arg, BenchmarkCase};

/// Operand sizes in bits.
pub const BIT_LENGTHS: [i64; 4] = [64, 1024, 16 * 1024, 256 * 1024];

/// An operand with the high bit set and a fixed byte pattern.
#[must_use]
pub fn make_operand(bit_length: usize) -> BigUint {
    if bit_length == 0 {
        return BigUint::from(0u32);
    }
    let mut bytes = vec![0xC3u8; bit_length.div_ceil(8)];
    bytes[0] |= 0x80;
    BigUint::from_bytes_be(&bytes)
}

fn bits_of(arg: Arg) -> usize {
    arg.as_int().and_then(|n| usize::try_from(n).ok()).unwrap_or(0)
}

pub fn cases() -> Vec<BenchmarkCase> {
    vec![
        BenchmarkCase::new("BM_bigint_add", |trial, arg| {
            let a = make_operand(bits_of(arg));
            let b = make_operand(bits_of(arg));
            trial.iter(|| black_box(&a) + black_box(&b));
        })
        .with_int_args(BIT_LENGTHS),
        BenchmarkCase::new("BM_bigint_mul", |trial, arg| {
            let a = make_operand(bits_of(arg));
            let b = make_operand(bits_of(arg));
            trial.iter(|| black_box(&a) * black_box(&b));
        })
        .with_int_args(BIT_LENGTHS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_bit_length() {
        let n = make_operand(1024);
        assert_eq!(n.bits(), 1024);
        assert_eq!(make_operand(0), BigUint::from(0u32));
    }

    #[test]
    fn mul_case_records_one_sample_per_iteration() {
        let clock = benchrun_core::ManualClock::default();
        let case = &cases()[1];
        let mut trial = benchrun_core::Trial::new(&clock, case.mode(), 3);
        case.run(&mut trial, Arg::Int(64));
        assert_eq!(trial.samples().len(), 3);
    }
}
