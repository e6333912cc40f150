//! Similarity scoring

use pagediff_core::DifferenceMask;

/// Percentage of pixels left unflagged by a raw mask, in `0.0..=100.0`
///
/// Always computed on the raw mask so smoothing cannot inflate the
/// amount of change. An empty mask scores 100.
pub fn similarity_percent(raw: &DifferenceMask) -> f64 {
    similarity_from_counts(raw.count_set(), raw.pixel_count())
}

/// `100 * (1 - differing / max(total, 1))`
pub fn similarity_from_counts(differing: u64, total: u64) -> f64 {
    100.0 * (1.0 - differing as f64 / total.max(1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagediff_core::{MASK_ON, Region};

    #[test]
    fn test_similarity_extremes() {
        assert_eq!(similarity_percent(&DifferenceMask::new(10, 10)), 100.0);
        assert_eq!(similarity_percent(&DifferenceMask::new(0, 0)), 100.0);
        let mut full = DifferenceMask::new(10, 10);
        full.fill_region(&Region::new_unchecked(0, 0, 9, 9), MASK_ON);
        assert_eq!(similarity_percent(&full), 0.0);
    }

    #[test]
    fn test_similarity_block() {
        assert!((similarity_from_counts(900, 40_000) - 97.75).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_monotonic() {
        let mut last = f64::INFINITY;
        for differing in 0..=100 {
            let s = similarity_from_counts(differing, 100);
            assert!(s <= last);
            last = s;
        }
    }
}
