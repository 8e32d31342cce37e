//! Cumulative depth histogram.
//!
//! Histogram equalization remaps samples through the cumulative
//! distribution of the current frame, so the palette gradient is spent
//! on values that actually occur. The buffer covers the full 16-bit
//! sample domain and is allocated once, then overwritten per frame.

/// Largest raw sample value the histogram can index.
pub const MAX_SAMPLE_VALUE: usize = u16::MAX as usize;

const DOMAIN: usize = MAX_SAMPLE_VALUE + 1;

/// Per-frame cumulative histogram over raw sample values.
///
/// After an update, `counts[v]` holds the number of samples with value
/// `<= v`, for `v >= 2`. Accumulation starts at index 2: bucket 0 holds
/// no-data pixels (rendered black, excluded from the distribution) and
/// bucket 1 is left un-accumulated as well to keep output identical to
/// long-standing depth-viewer behavior. See DESIGN.md.
#[derive(Debug, Clone)]
pub struct DepthHistogram {
    counts: Vec<u32>,
}

impl DepthHistogram {
    /// Allocates a histogram covering the full 16-bit domain.
    pub fn new() -> Self {
        Self {
            counts: vec![0; DOMAIN],
        }
    }

    /// Rebuilds the cumulative histogram from 16-bit depth samples.
    pub fn update_z16(&mut self, samples: &[u16]) {
        self.counts.fill(0);
        for &s in samples {
            self.counts[s as usize] += 1;
        }
        self.accumulate();
    }

    /// Rebuilds the cumulative histogram from float disparity samples.
    ///
    /// Samples are truncated to integers before indexing; negative and
    /// sub-one values land in bucket 0 and out-of-domain values in the
    /// top bucket.
    pub fn update_disparity32(&mut self, samples: &[f32]) {
        self.counts.fill(0);
        for &s in samples {
            // `as` saturates: negatives and NaN go to 0.
            let v = (s as usize).min(MAX_SAMPLE_VALUE);
            self.counts[v] += 1;
        }
        self.accumulate();
    }

    fn accumulate(&mut self) {
        for i in 2..DOMAIN {
            self.counts[i] += self.counts[i - 1];
        }
    }

    /// Normalized position of `value` within the frame's cumulative
    /// distribution, in `[0, 1]`.
    ///
    /// When the frame contained no countable samples the final
    /// cumulative count is zero; the position is then defined as 0
    /// rather than dividing by zero.
    #[inline]
    pub fn normalized(&self, value: usize) -> f32 {
        let total = self.counts[MAX_SAMPLE_VALUE];
        if total == 0 {
            return 0.0;
        }
        self.counts[value.min(MAX_SAMPLE_VALUE)] as f32 / total as f32
    }

    /// Cumulative count at `value` (clamped into the domain).
    #[inline]
    pub fn count(&self, value: usize) -> u32 {
        self.counts[value.min(MAX_SAMPLE_VALUE)]
    }
}

impl Default for DepthHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_monotonic() {
        let mut hist = DepthHistogram::new();
        hist.update_z16(&[3, 3, 7, 100, 65535, 9, 9, 9]);
        let mut prev = hist.count(2);
        for v in 3..=MAX_SAMPLE_VALUE {
            let c = hist.count(v);
            assert!(c >= prev);
            prev = c;
        }
        // All samples nonzero, so the top bucket holds the full count.
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 8);
    }

    #[test]
    fn test_zero_samples_stay_out_of_distribution() {
        let mut hist = DepthHistogram::new();
        hist.update_z16(&[0, 0, 5, 5]);
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 2);
        assert_eq!(hist.normalized(5), 1.0);
    }

    #[test]
    fn test_all_zero_frame_normalizes_to_zero() {
        let mut hist = DepthHistogram::new();
        hist.update_z16(&[0; 16]);
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 0);
        assert_eq!(hist.normalized(0), 0.0);
        assert_eq!(hist.normalized(1234), 0.0);
    }

    #[test]
    fn test_equalization_example() {
        // 2x2 frame with raw values [0, 1, 1, 2].
        let mut hist = DepthHistogram::new();
        hist.update_z16(&[0, 1, 1, 2]);
        // Bucket 1 keeps its raw count (never accumulated), index 2 on
        // accumulates: 1 zero excluded, 2 ones, 1 two.
        assert_eq!(hist.count(1), 2);
        assert_eq!(hist.count(2), 3);
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 3);
        assert!(hist.normalized(1) < hist.normalized(2));
        assert_eq!(hist.normalized(2), 1.0);
    }

    #[test]
    fn test_disparity_truncation() {
        let mut hist = DepthHistogram::new();
        hist.update_disparity32(&[0.9, 1.2, 1.9, 2.5, -4.0, f32::NAN, 1e9]);
        // 0.9, -4.0 and NaN land in bucket 0; 1.2 and 1.9 in bucket 1.
        assert_eq!(hist.count(1), 2);
        // 1e9 saturates into the top bucket.
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 4);
    }

    #[test]
    fn test_reuse_resets_counts() {
        let mut hist = DepthHistogram::new();
        hist.update_z16(&[10; 100]);
        hist.update_z16(&[20, 20]);
        assert_eq!(hist.count(MAX_SAMPLE_VALUE), 2);
    }
}
