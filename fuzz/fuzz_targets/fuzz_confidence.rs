#![no_main]

use libfuzzer_sys::fuzz_target;

use benchrun_core::filter_outliers;

fuzz_target!(|data: &[u8]| {
    let samples: Vec<f64> = data
        .chunks_exact(4)
        .map(|c| f64::from(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
        .collect();
    let total: f64 = samples.iter().sum();
    let result = filter_outliers(&samples, total);

    assert_eq!(result.submitted, samples.len());
    assert!(result.retained_count <= samples.len() as u64);
    if !samples.is_empty() {
        assert!(result.retained_count > 0);
    }
});
