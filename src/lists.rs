//! Day 1: distance and similarity between two columns of location IDs.

use rustc_hash::FxHashMap;

/// Sum of pairwise absolute differences after sorting both lists.
///
/// The two lists must pair up one-to-one.
pub fn total_distance(left: &[i64], right: &[i64]) -> u64 {
    assert_eq!(left.len(), right.len(), "location lists must pair up");

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter().zip(&right).map(|(&a, &b)| a.abs_diff(b)).sum()
}

/// Each left value weighted by how often it appears in the right list, summed.
pub fn similarity_score(left: &[i64], right: &[i64]) -> i64 {
    let mut occurrences: FxHashMap<i64, i64> = FxHashMap::default();
    for &value in right {
        *occurrences.entry(value).or_insert(0) += 1;
    }

    left.iter()
        .map(|value| value * occurrences.get(value).copied().unwrap_or(0))
        .sum()
}
