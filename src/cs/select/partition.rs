use std::cmp::Ordering;

/// Lomuto partition of `arr[left..=right]` around the element at `pivot_index`.
///
/// The pivot is parked at `right`, then a single left-to-right scan swaps every
/// element that compares strictly less than the pivot forward to the `store`
/// boundary. The pivot is finally swapped into `store`, which is returned.
/// Afterwards every index below the returned one holds a smaller element and
/// every index above it holds a greater or equal one. Equal elements always
/// land to the right of the pivot; their relative order is not preserved.
///
/// # Complexity
/// * Time: O(right - left)
/// * Space: O(1)
///
/// # Panics
/// Panics if `left <= pivot_index <= right < arr.len()` does not hold.
pub fn partition<T, F>(
    arr: &mut [T],
    left: usize,
    right: usize,
    pivot_index: usize,
    compare: &F,
) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    assert!(
        left <= pivot_index && pivot_index <= right && right < arr.len(),
        "pivot {pivot_index} outside [{left}, {right}] of a slice of length {}",
        arr.len()
    );
    arr.swap(pivot_index, right);

    let mut store = left;
    for i in left..right {
        if compare(&arr[i], &arr[right]) == Ordering::Less {
            arr.swap(store, i);
            store += 1;
        }
    }

    arr.swap(right, store);
    store
}
