/// Stride between consecutive items' sub-sequences.
const ITEM_STRIDE: i128 = 97;
/// Stride between consecutive seeds' sub-sequences.
const SEED_STRIDE: i128 = 53;

/// Radical inverse of `index` in `base`, in `[0, 1)`.
///
/// # Panics
/// Panics if `base < 2`.
pub fn halton(index: u64, base: u64) -> f64 {
    assert!(base >= 2, "halton base must be at least 2");

    let mut result = 0.0;
    let mut fraction = 1.0 / base as f64;
    let mut i = index;

    while i > 0 {
        result += fraction * (i % base) as f64;
        i /= base;
        fraction /= base as f64;
    }

    result
}

/// Sequence index for an item's tier-1 attempt under a seed.
///
/// Negative results (only reachable with negative seeds) map to 0.
pub fn sequence_index(item: usize, attempt: usize, seed: i64) -> u64 {
    let raw = item as i128 * ITEM_STRIDE + attempt as i128 + seed as i128 * SEED_STRIDE + 1;
    raw.clamp(0, u64::MAX as i128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_two_matches_van_der_corput() {
        assert_eq!(halton(0, 2), 0.0);
        assert_eq!(halton(1, 2), 0.5);
        assert_eq!(halton(2, 2), 0.25);
        assert_eq!(halton(3, 2), 0.75);
        assert_eq!(halton(4, 2), 0.125);
    }

    #[test]
    fn base_three_prefix() {
        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0 / 9.0, 4.0 / 9.0];
        for (idx, value) in expected.iter().enumerate() {
            assert!((halton(idx as u64, 3) - value).abs() < 1e-12);
        }
    }

    #[test]
    fn values_stay_in_unit_interval() {
        for base in [2, 3, 5] {
            for idx in 0..2_000 {
                let value = halton(idx, base);
                assert!((0.0..1.0).contains(&value), "halton({idx}, {base}) = {value}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "halton base must be at least 2")]
    fn base_one_panics() {
        halton(3, 1);
    }

    #[test]
    fn sequence_index_strides() {
        assert_eq!(sequence_index(0, 0, 0), 1);
        assert_eq!(sequence_index(1, 0, 0), 98);
        assert_eq!(sequence_index(0, 4, 1), 58);
        assert_eq!(sequence_index(0, 0, -1), 0);
    }
}
