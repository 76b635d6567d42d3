//! Threshold bucketing for coarse-grained reporting.
//!
//! Raw values are mapped to the greatest threshold in a fixed ascending table
//! that does not exceed them, so no exact counts leave the process.

/// Reserved out-of-range sample marking "excluded from normal distribution"
/// (e.g. no wallet was ever created).
pub const SENTINEL_SAMPLE: i32 = i32::MAX - 1;

/// Index of the greatest threshold not exceeding `value`.
///
/// Values below the first threshold land in bucket 0. `thresholds` must be
/// non-empty and strictly ascending.
pub fn bucket_index(thresholds: &[u64], value: u64) -> usize {
    debug_assert!(!thresholds.is_empty());
    debug_assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    thresholds.iter().rposition(|&t| t <= value).unwrap_or(0)
}

/// The threshold value chosen for `value`.
pub fn bucket_value(thresholds: &[u64], value: u64) -> u64 {
    thresholds[bucket_index(thresholds, value)]
}
