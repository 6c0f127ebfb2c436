//! # Median of Medians
//!
//! Deterministic pivot selection (Blum, Floyd, Pratt, Rivest, Tarjan). The
//! subrange is cut into consecutive groups of five, the median of every group
//! is found by sorting the group, and the median of those medians is found by
//! running the selection engine over the group-median indices.
//!
//! Because the engine selects an index, the pivot returned is the exact
//! element chosen by the recursion, even when other group medians tie with it
//! under the comparator.
//!
//! The chosen pivot is larger than roughly 30% and smaller than roughly 30% of
//! the subrange, which bounds every partition step to a constant fraction of
//! the input and keeps whole-call selection linear in the worst case.

use std::cmp::Ordering;

use super::engine::{select_in_place, PivotRule};

/// Number of elements per group. The last group of a subrange may be shorter.
pub const GROUP_SIZE: usize = 5;

/// Pivot rule picking the median of group-of-five medians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianOfMedians;

impl PivotRule for MedianOfMedians {
    fn name(&self) -> &'static str {
        "median-of-medians"
    }

    fn choose_pivot<T, F>(&mut self, arr: &[T], left: usize, right: usize, compare: &F) -> usize
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        median_of_medians(arr, left, right, compare)
    }
}

/// Returns the index of the median of medians of `arr[left..=right]`.
///
/// Subranges of at most [`GROUP_SIZE`] elements return their own lower median.
/// Larger subranges collect the lower median of each group and return the
/// index of the `ceil(m / 2)`-th smallest of the `m` group medians.
///
/// `arr` is not reordered.
///
/// # Complexity
/// * Time: O(right - left)
/// * Space: O((right - left) / 5) for the group-median indices
///
/// # Panics
/// Panics if `left <= right < arr.len()` does not hold.
pub fn median_of_medians<T, F>(arr: &[T], left: usize, right: usize, compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    assert!(
        left <= right && right < arr.len(),
        "invalid subrange [{left}, {right}] for a slice of length {}",
        arr.len()
    );
    if right - left < GROUP_SIZE {
        return group_median(arr, left, right, compare);
    }

    let mut medians: Vec<usize> = (left..=right)
        .step_by(GROUP_SIZE)
        .map(|start| group_median(arr, start, (start + GROUP_SIZE - 1).min(right), compare))
        .collect();
    let rank = medians.len().div_ceil(2);

    // Type-erased so every recursion level shares one instantiation.
    let by_element = |a: &usize, b: &usize| compare(&arr[*a], &arr[*b]);
    let by_element: &dyn Fn(&usize, &usize) -> Ordering = &by_element;
    let at = select_in_place(&mut medians, rank, &by_element, &mut MedianOfMedians);
    medians[at]
}

/// Lower median index of the group `arr[start..=end]` (at most five elements).
fn group_median<T, F>(arr: &[T], start: usize, end: usize, compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = end - start + 1;
    let mut group = [0usize; GROUP_SIZE];
    for (slot, index) in group.iter_mut().zip(start..=end) {
        *slot = index;
    }
    let group = &mut group[..len];
    // Stable, so equal elements keep their original order.
    group.sort_by(|&a, &b| compare(&arr[a], &arr[b]));
    group[(len - 1) / 2]
}
