#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rewardscope_core::bucket::{bucket_index, bucket_value, SENTINEL_SAMPLE};

#[test]
fn chooses_greatest_threshold_not_exceeding_value() {
    let buckets = [0u64, 1, 3];
    assert_eq!(bucket_value(&buckets, 0), 0);
    assert_eq!(bucket_value(&buckets, 1), 1);
    assert_eq!(bucket_value(&buckets, 2), 1);
    assert_eq!(bucket_value(&buckets, 3), 3);
    assert_eq!(bucket_value(&buckets, 100), 3);
}

#[test]
fn bucketing_law_holds_for_all_small_counts() {
    let buckets = [0u64, 1, 3];
    for count in 0..1000u64 {
        let chosen = bucket_value(&buckets, count);
        assert!(chosen <= count);
        // No larger threshold still fits.
        assert!(buckets.iter().all(|&t| t > count || t <= chosen));
    }
}

#[test]
fn value_below_first_threshold_lands_in_bucket_zero() {
    let buckets = [5u64, 10, 50];
    assert_eq!(bucket_index(&buckets, 0), 0);
    assert_eq!(bucket_index(&buckets, 3), 0);
    assert_eq!(bucket_index(&buckets, 5), 0);
    assert_eq!(bucket_index(&buckets, 9), 0);
    assert_eq!(bucket_index(&buckets, 10), 1);
    assert_eq!(bucket_index(&buckets, 49), 1);
    assert_eq!(bucket_index(&buckets, 50), 2);
    assert_eq!(bucket_index(&buckets, 5000), 2);
}

#[test]
fn sentinel_is_outside_any_linear_range() {
    assert_eq!(SENTINEL_SAMPLE, i32::MAX - 1);
}
