//! # Selection Engine
//!
//! Rank search shared by every selection variant. The engine repeatedly asks a
//! [`PivotRule`] for a pivot inside the current subrange, partitions around it
//! with the Lomuto scheme, and narrows to the side holding the requested rank.
//! The rank is 1-indexed and re-based to the subrange after every step.
//!
//! Each narrowing step is a tail call of the previous one, so the search runs
//! as a loop. The only true recursion is the median-of-medians rule selecting
//! among its group medians, which shrinks the input five-fold per level.

use std::cmp::Ordering;

use log::{debug, trace};

use super::median_of_medians::MedianOfMedians;
use super::partition::partition;
use super::randomized::RandomPivot;
use crate::error::{Error, Result};

/// Strategy picking the pivot index for one partition step.
pub trait PivotRule {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns an index within `[left, right]`. `arr` must not be reordered.
    fn choose_pivot<T, F>(&mut self, arr: &[T], left: usize, right: usize, compare: &F) -> usize
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering;
}

/// Checks that `k` is a valid 1-indexed rank for a collection of `len` items.
pub(crate) fn validate_rank(len: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k > len {
        return Err(Error::invalid_rank(k, len));
    }
    Ok(())
}

/// Rank of the lower median, `floor((len + 1) / 2)`.
pub(crate) fn lower_median_rank(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(Error::invalid_rank(0, 0));
    }
    Ok((len + 1) / 2)
}

/// Moves the `k`-th smallest element of `arr` (1-indexed) to its sorted
/// position and returns that position.
///
/// Callers validate `k` first.
pub(crate) fn select_in_place<T, F, P>(arr: &mut [T], k: usize, compare: &F, rule: &mut P) -> usize
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
    P: PivotRule,
{
    debug_assert!(k >= 1 && k <= arr.len(), "rank {k} outside 1..={}", arr.len());
    let mut k = k;
    let mut left = 0;
    let mut right = arr.len() - 1;

    loop {
        if left == right {
            return left;
        }

        let pivot = rule.choose_pivot(arr, left, right, compare);
        let pivot = partition(arr, left, right, pivot, compare);
        let rank = pivot - left + 1;
        trace!(
            "{}: [{left}, {right}] split at {pivot} (rank {rank}), looking for rank {k}",
            rule.name()
        );

        match k.cmp(&rank) {
            Ordering::Equal => return pivot,
            Ordering::Less => right = pivot - 1,
            Ordering::Greater => {
                left = pivot + 1;
                k -= rank;
            }
        }
    }
}

/// Order-statistic selector parameterized by its pivot rule.
///
/// [`Selector::deterministic`] gives worst-case linear selection,
/// [`Selector::randomized`] gives expected linear selection. A randomized
/// selector keeps its generator across calls, so a seeded selector replays the
/// same pivot sequence for the same sequence of calls.
///
/// Every call clones the input into a private buffer; the caller's slice is
/// never reordered.
///
/// # Examples
/// ```
/// use algos_select::select::Selector;
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6];
/// let mut selector = Selector::deterministic();
/// assert_eq!(selector.select(&data, 4).unwrap(), 3);
///
/// let mut seeded = Selector::randomized(Some(42));
/// assert_eq!(seeded.median(&data).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Selector<P = MedianOfMedians> {
    rule: P,
}

impl Selector<MedianOfMedians> {
    /// Selector using the median-of-medians pivot rule.
    pub fn deterministic() -> Self {
        Self::with_rule(MedianOfMedians)
    }
}

impl Selector<RandomPivot> {
    /// Selector drawing uniformly random pivots. `Some(seed)` makes the pivot
    /// sequence reproducible; `None` seeds from the operating system.
    pub fn randomized(seed: Option<u64>) -> Self {
        Self::with_rule(RandomPivot::new(seed))
    }
}

impl<P: PivotRule> Selector<P> {
    /// Selector using a caller-supplied pivot rule.
    pub fn with_rule(rule: P) -> Self {
        Selector { rule }
    }

    pub fn rule(&self) -> &P {
        &self.rule
    }

    pub fn into_rule(self) -> P {
        self.rule
    }

    /// Returns the `k`-th smallest element (1-indexed) of `items`.
    ///
    /// # Errors
    /// * [`Error::EmptyInput`] if `items` is empty
    /// * [`Error::InvalidRank`] if `k` is outside `1..=items.len()`
    pub fn select<T>(&mut self, items: &[T], k: usize) -> Result<T>
    where
        T: Ord + Clone,
    {
        self.select_by(items, k, Ord::cmp)
    }

    /// Like [`Selector::select`], ordering elements by the key `key` extracts.
    pub fn select_by_key<T, K, F>(&mut self, items: &[T], k: usize, key: F) -> Result<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.select_by(items, k, |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    /// Like [`Selector::select`], ordering elements with `compare`.
    pub fn select_by<T, F>(&mut self, items: &[T], k: usize, compare: F) -> Result<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        validate_rank(items.len(), k)?;
        debug!("{} select: n = {}, k = {k}", self.rule.name(), items.len());

        let mut work = items.to_vec();
        let at = select_in_place(&mut work, k, &compare, &mut self.rule);
        Ok(work.swap_remove(at))
    }

    /// Returns the lower median, the element of rank `(n + 1) / 2`.
    ///
    /// # Errors
    /// [`Error::InvalidRank`] with `k = 0, len = 0` if `items` is empty.
    pub fn median<T>(&mut self, items: &[T]) -> Result<T>
    where
        T: Ord + Clone,
    {
        self.median_by(items, Ord::cmp)
    }

    pub fn median_by_key<T, K, F>(&mut self, items: &[T], key: F) -> Result<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.median_by(items, |a: &T, b: &T| key(a).cmp(&key(b)))
    }

    pub fn median_by<T, F>(&mut self, items: &[T], compare: F) -> Result<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        let k = lower_median_rank(items.len())?;
        self.select_by(items, k, compare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always pivots on the leftmost element, the quadratic worst case on
    /// sorted input.
    #[derive(Default)]
    struct Leftmost {
        calls: usize,
    }

    impl PivotRule for Leftmost {
        fn name(&self) -> &'static str {
            "leftmost"
        }

        fn choose_pivot<T, F>(&mut self, _arr: &[T], left: usize, _right: usize, _: &F) -> usize
        where
            T: Clone,
            F: Fn(&T, &T) -> Ordering,
        {
            self.calls += 1;
            left
        }
    }

    #[test]
    fn test_validate_rank() {
        assert_eq!(validate_rank(0, 1), Err(Error::EmptyInput));
        assert_eq!(validate_rank(0, 0), Err(Error::EmptyInput));
        assert_eq!(validate_rank(3, 0), Err(Error::invalid_rank(0, 3)));
        assert_eq!(validate_rank(3, 4), Err(Error::invalid_rank(4, 3)));
        assert!(validate_rank(3, 1).is_ok());
        assert!(validate_rank(3, 3).is_ok());
    }

    #[test]
    fn test_lower_median_rank() {
        assert_eq!(lower_median_rank(1), Ok(1));
        assert_eq!(lower_median_rank(5), Ok(3));
        assert_eq!(lower_median_rank(6), Ok(3));
        assert_eq!(lower_median_rank(0), Err(Error::invalid_rank(0, 0)));
    }

    #[test]
    fn test_select_in_place_places_element() {
        let mut arr = vec![9, 4, 7, 1, 8, 2];
        let at = select_in_place(&mut arr, 3, &i32::cmp, &mut MedianOfMedians);
        assert_eq!(arr[at], 4);
        assert_eq!(at, 2);
        assert!(arr[..at].iter().all(|&x| x < 4));
        assert!(arr[at + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn test_custom_rule() {
        let data: Vec<u32> = (1..=20).collect();
        let mut selector = Selector::with_rule(Leftmost::default());
        assert_eq!(selector.select(&data, 20).unwrap(), 20);
        // Sorted input with a leftmost pivot peels one element per step.
        assert_eq!(selector.rule().calls, 19);
        assert_eq!(selector.select(&data, 1).unwrap(), 1);
        assert_eq!(selector.into_rule().calls, 20);
    }

    #[test]
    fn test_selector_keeps_input() {
        let data = vec![5, 3, 8, 1, 9, 2, 7];
        let mut selector = Selector::deterministic();
        for k in 1..=data.len() {
            selector.select(&data, k).unwrap();
        }
        assert_eq!(data, vec![5, 3, 8, 1, 9, 2, 7]);
    }

    #[test]
    fn test_selector_errors() {
        let mut selector = Selector::deterministic();
        let empty: [i32; 0] = [];
        assert_eq!(selector.select(&empty, 1), Err(Error::EmptyInput));
        assert_eq!(selector.median(&empty), Err(Error::invalid_rank(0, 0)));
        assert_eq!(selector.select(&[1, 2], 3), Err(Error::invalid_rank(3, 2)));
    }

    #[test]
    fn test_select_by_descending() {
        let data = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut selector = Selector::deterministic();
        let second_largest = selector.select_by(&data, 2, |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(second_largest, Ok(6));
    }

    #[test]
    fn test_median_by_key() {
        let words = ["pear", "fig", "banana", "kiwi", "apple"];
        let mut selector = Selector::randomized(Some(3));
        // Lengths 4, 3, 6, 4, 5: the lower median length is 4.
        let median = selector.median_by_key(&words, |w| w.len()).unwrap();
        assert_eq!(median.len(), 4);
    }
}
