//! # Randomized Selection (Quickselect)
//!
//! Quickselect with Lomuto partitioning and a uniformly random pivot index at
//! every step. Runs in expected O(n) time. The worst case is O(n²) and is
//! not guarded against; it requires an exponentially unlikely run of bad pivots.
//!
//! Pivots come from a dedicated [`ChaCha20Rng`] owned by the call (or by the
//! [`Selector`]), never from a thread-global generator. A seed makes the pivot
//! sequence reproducible on every platform.

use std::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::engine::{PivotRule, Selector};
use crate::error::Result;

/// Pivot rule drawing a uniformly random index from the subrange.
#[derive(Debug, Clone)]
pub struct RandomPivot<R = ChaCha20Rng> {
    rng: R,
}

impl RandomPivot<ChaCha20Rng> {
    /// `Some(seed)` gives a reproducible generator, `None` one seeded from the
    /// operating system.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_rng(ChaCha20Rng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPivot<R> {
    /// Wraps any generator, e.g. a `StdRng` shared with a benchmark driver.
    pub fn from_rng(rng: R) -> Self {
        RandomPivot { rng }
    }
}

impl<R: Rng> PivotRule for RandomPivot<R> {
    fn name(&self) -> &'static str {
        "randomized"
    }

    fn choose_pivot<T, F>(&mut self, _arr: &[T], left: usize, right: usize, _: &F) -> usize
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        self.rng.gen_range(left..=right)
    }
}

/// Returns the `k`-th smallest element (1-indexed) using random pivots.
///
/// `items` is cloned; the caller's slice is left untouched.
///
/// # Errors
/// * [`Error::EmptyInput`](crate::Error::EmptyInput) if `items` is empty
/// * [`Error::InvalidRank`](crate::Error::InvalidRank) if `k` is outside `1..=items.len()`
///
/// # Examples
/// ```
/// use algos_select::select::randomized_select;
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(randomized_select(&data, 4, Some(42)).unwrap(), 3);
/// assert_eq!(randomized_select(&data, 8, None).unwrap(), 9);
/// ```
pub fn randomized_select<T>(items: &[T], k: usize, seed: Option<u64>) -> Result<T>
where
    T: Ord + Clone,
{
    Selector::randomized(seed).select(items, k)
}

/// [`randomized_select`] ordering elements by an extracted key.
pub fn randomized_select_by_key<T, K, F>(
    items: &[T],
    k: usize,
    key: F,
    seed: Option<u64>,
) -> Result<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    Selector::randomized(seed).select_by_key(items, k, key)
}

/// [`randomized_select`] ordering elements with a comparator.
pub fn randomized_select_by<T, F>(items: &[T], k: usize, compare: F, seed: Option<u64>) -> Result<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    Selector::randomized(seed).select_by(items, k, compare)
}

/// Lower median using random pivots.
///
/// # Errors
/// [`Error::InvalidRank`](crate::Error::InvalidRank) if `items` is empty.
pub fn randomized_find_median<T>(items: &[T], seed: Option<u64>) -> Result<T>
where
    T: Ord + Clone,
{
    Selector::randomized(seed).median(items)
}

pub fn randomized_find_median_by_key<T, K, F>(items: &[T], key: F, seed: Option<u64>) -> Result<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    Selector::randomized(seed).median_by_key(items, key)
}
