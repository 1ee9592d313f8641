//! Per-trial storage of elapsed-time samples.

use crate::constants::SAMPLE_PREALLOC_LIMIT;

/// Growable store of per-iteration elapsed times (ns), bounded by the
/// iteration count of the trial that owns it.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    limit: usize,
    dropped: usize,
}

impl SampleBuffer {
    /// Create a buffer that accepts at most `limit` samples.
    ///
    /// Room for every sample is reserved up front so the vector never
    /// reallocates between timed windows. If that reservation fails, the
    /// buffer starts at `SAMPLE_PREALLOC_LIMIT` and grows as needed.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let mut samples = Vec::new();
        if samples.try_reserve_exact(limit).is_err() {
            tracing::warn!(
                limit,
                "cannot reserve the full sample buffer, it will grow during the trial"
            );
            samples.reserve_exact(limit.min(SAMPLE_PREALLOC_LIMIT));
        }
        Self {
            samples,
            limit,
            dropped: 0,
        }
    }

    /// Record one sample. Returns `false` (and drops the sample) when the
    /// buffer already holds `limit` samples.
    pub fn push(&mut self, sample: f64) -> bool {
        if self.samples.len() >= self.limit {
            self.dropped += 1;
            return false;
        }
        self.samples.push(sample);
        true
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples rejected because the buffer was full.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the buffer, yielding the recorded samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_within_limit() {
        let mut buf = SampleBuffer::with_limit(3);
        assert!(buf.is_empty());
        assert!(buf.push(1.0));
        assert!(buf.push(2.0));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn push_past_limit_is_dropped() {
        let mut buf = SampleBuffer::with_limit(1);
        assert!(buf.push(1.0));
        assert!(!buf.push(2.0));
        assert!(!buf.push(3.0));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.dropped(), 2);
        assert_eq!(buf.into_vec(), vec![1.0]);
    }

    #[test]
    fn full_limit_is_reserved_up_front() {
        let limit = SAMPLE_PREALLOC_LIMIT * 2;
        let mut buf = SampleBuffer::with_limit(limit);
        let capacity = buf.samples.capacity();
        assert!(capacity >= limit);
        for i in 0..limit {
            assert!(buf.push(i as f64));
        }
        assert_eq!(buf.samples.capacity(), capacity);
        assert!(!buf.push(0.0));
    }

    #[test]
    fn unreservable_limit_falls_back_to_growth() {
        let buf = SampleBuffer::with_limit(usize::MAX);
        assert!(buf.samples.capacity() <= SAMPLE_PREALLOC_LIMIT);
        assert_eq!(buf.dropped(), 0);
    }
}
