use std::cmp::Ordering;

use super::engine::Selector;
use crate::error::Result;

/// Returns the `k`-th smallest element (1-indexed) of `items` in worst-case
/// linear time, using the median-of-medians pivot rule.
///
/// `items` is cloned into a private buffer and never reordered.
///
/// # Arguments
/// * `items` - The collection to select from
/// * `k` - The rank to find; `1` is the minimum, `items.len()` the maximum
///
/// # Returns
/// * `Ok(element)` - The element of rank `k`
/// * `Err(Error::EmptyInput)` - If `items` is empty
/// * `Err(Error::InvalidRank)` - If `k` is outside `1..=items.len()`
///
/// # Examples
/// ```
/// use algos_select::select::deterministic_select;
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(deterministic_select(&data, 4).unwrap(), 3);
/// assert_eq!(deterministic_select(&data, 1).unwrap(), 1);
/// assert_eq!(deterministic_select(&data, data.len()).unwrap(), 9);
/// ```
///
/// # Complexity
/// * Time: O(n) worst case
/// * Space: O(n) for the working copy and the group-median buffers
pub fn deterministic_select<T>(items: &[T], k: usize) -> Result<T>
where
    T: Ord + Clone,
{
    Selector::deterministic().select(items, k)
}

/// [`deterministic_select`] ordering elements by an extracted key.
///
/// ```
/// use algos_select::select::deterministic_select_by_key;
///
/// let jobs = [("build", 42), ("lint", 7), ("test", 19)];
/// let quickest = deterministic_select_by_key(&jobs, 1, |job| job.1).unwrap();
/// assert_eq!(quickest, ("lint", 7));
/// ```
pub fn deterministic_select_by_key<T, K, F>(items: &[T], k: usize, key: F) -> Result<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    Selector::deterministic().select_by_key(items, k, key)
}

/// [`deterministic_select`] ordering elements with a comparator.
pub fn deterministic_select_by<T, F>(items: &[T], k: usize, compare: F) -> Result<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    Selector::deterministic().select_by(items, k, compare)
}

/// Returns the lower median of `items`: the element of rank `(n + 1) / 2`.
///
/// Fails with `InvalidRank { k: 0, len: 0 }` on an empty collection.
pub fn find_median<T>(items: &[T]) -> Result<T>
where
    T: Ord + Clone,
{
    Selector::deterministic().median(items)
}

pub fn find_median_by_key<T, K, F>(items: &[T], key: F) -> Result<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    Selector::deterministic().median_by_key(items, key)
}
