//! Property-based tests for the selection engines.
//!
//! Both engines must agree with a full sort for every rank, leave the input
//! untouched, and (for the randomized engine) replay identically under a
//! fixed seed.

use algos_select::select::{
    deterministic_select, deterministic_select_by_key, find_median, median_of_medians,
    randomized_find_median, randomized_select, randomized_select_by_key, Selector,
};
use algos_select::Error;
use proptest::prelude::*;
use std::fmt::Debug;

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 1..300)
}

/// Heavy duplication, the case Lomuto partitioning handles worst.
fn few_distinct() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 1..300)
}

/// A collection paired with a valid rank into it.
fn with_rank<T>(elements: impl Strategy<Value = Vec<T>>) -> impl Strategy<Value = (Vec<T>, usize)>
where
    T: Clone + Debug,
{
    elements.prop_flat_map(|v| {
        let len = v.len();
        (Just(v), 1..=len)
    })
}

proptest! {
    #[test]
    fn prop_engines_agree_with_sort((data, k) in with_rank(values()), seed in any::<u64>()) {
        let mut sorted = data.clone();
        sorted.sort();
        let expected = sorted[k - 1];

        prop_assert_eq!(deterministic_select(&data, k), Ok(expected));
        prop_assert_eq!(randomized_select(&data, k, Some(seed)), Ok(expected));
    }

    #[test]
    fn prop_duplicates_agree_with_sort((data, k) in with_rank(few_distinct())) {
        let mut sorted = data.clone();
        sorted.sort();

        prop_assert_eq!(deterministic_select(&data, k), Ok(sorted[k - 1]));
        prop_assert_eq!(randomized_select(&data, k, None), Ok(sorted[k - 1]));
    }

    #[test]
    fn prop_input_is_untouched((data, k) in with_rank(values())) {
        let before = data.clone();
        let first = deterministic_select(&data, k);
        let second = deterministic_select(&data, k);
        randomized_select(&data, k, None).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(data, before);
    }

    #[test]
    fn prop_seed_reproduces((data, k) in with_rank(values()), seed in any::<u64>()) {
        prop_assert_eq!(
            randomized_select(&data, k, Some(seed)),
            randomized_select(&data, k, Some(seed))
        );

        let mut a = Selector::randomized(Some(seed));
        let mut b = Selector::randomized(Some(seed));
        for _ in 0..3 {
            prop_assert_eq!(a.median(&data), b.median(&data));
        }
    }

    #[test]
    fn prop_extremes(data in values()) {
        let min = *data.iter().min().unwrap();
        let max = *data.iter().max().unwrap();

        prop_assert_eq!(deterministic_select(&data, 1), Ok(min));
        prop_assert_eq!(deterministic_select(&data, data.len()), Ok(max));
        prop_assert_eq!(randomized_select(&data, 1, None), Ok(min));
        prop_assert_eq!(randomized_select(&data, data.len(), None), Ok(max));
    }

    #[test]
    fn prop_median_is_lower_median(data in values(), seed in any::<u64>()) {
        let mut sorted = data.clone();
        sorted.sort();
        let lower = sorted[(data.len() + 1) / 2 - 1];

        prop_assert_eq!(find_median(&data), Ok(lower));
        prop_assert_eq!(randomized_find_median(&data, Some(seed)), Ok(lower));
    }

    #[test]
    fn prop_rank_out_of_range(data in values(), extra in 1usize..10) {
        let len = data.len();
        prop_assert_eq!(deterministic_select(&data, 0), Err(Error::InvalidRank { k: 0, len }));
        prop_assert_eq!(
            randomized_select(&data, len + extra, None),
            Err(Error::InvalidRank { k: len + extra, len })
        );
    }

    #[test]
    fn prop_by_key_selects_records(
        (keys, k) in with_rank(prop::collection::vec(0u32..50, 1..200))
    ) {
        let records: Vec<(u32, String)> = keys
            .iter()
            .enumerate()
            .map(|(i, &key)| (key, format!("record-{i}")))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();

        let det = deterministic_select_by_key(&records, k, |r| r.0).unwrap();
        let rnd = randomized_select_by_key(&records, k, |r| r.0, Some(11)).unwrap();
        prop_assert_eq!(det.0, sorted[k - 1]);
        prop_assert_eq!(rnd.0, sorted[k - 1]);
        prop_assert!(records.contains(&det));
        prop_assert!(records.contains(&rnd));
    }

    #[test]
    fn prop_pivot_is_balanced(n in 100usize..2000, seed in any::<u64>()) {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut data: Vec<usize> = (0..n).collect();
        data.shuffle(&mut rand::rngs::StdRng::seed_from_u64(seed));

        let pivot = median_of_medians(&data, 0, n - 1, &|a: &usize, b: &usize| a.cmp(b));
        // Values are a permutation of 0..n, so the value is its own 0-based rank.
        let rank = data[pivot] + 1;
        prop_assert!(rank * 10 >= 3 * n - 30, "rank {} too low for n = {}", rank, n);
        prop_assert!(rank * 10 <= 7 * n + 30, "rank {} too high for n = {}", rank, n);
    }
}

#[test]
fn empty_input_fails() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(deterministic_select(&empty, 1), Err(Error::EmptyInput));
    assert_eq!(randomized_select(&empty, 1, Some(1)), Err(Error::EmptyInput));
    assert_eq!(find_median(&empty), Err(Error::InvalidRank { k: 0, len: 0 }));
}
