use log::trace;
use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Collections at or below this size are sorted directly.
pub const SMALL_COLLECTION: usize = 16;

/// Group size used when gathering medians for the pivot.
pub const GROUP_SIZE: usize = 5;

/// Returns the `k`-th smallest element (0-indexed) of `items`.
///
/// Uses deterministic median-of-medians pivoting, so the running time is
/// linear in the worst case. `items` is left untouched; the search works on
/// its own copy.
///
/// # Arguments
/// * `items` - The collection to select from
/// * `k` - The zero-based rank in ascending order
///
/// # Returns
/// * `Ok(element)` - The element at position `k` of the sorted collection
/// * `Err(Error::EmptyInput)` - If `items` is empty
/// * `Err(Error::IndexOutOfBounds)` - If `k >= items.len()`
///
/// # Examples
/// ```
/// use threshold_select::find_kth;
///
/// let values = [5, 3, 8, 1, 9, 2];
/// assert_eq!(find_kth(&values, 0).unwrap(), 1);
/// assert_eq!(find_kth(&values, 2).unwrap(), 3);
/// assert_eq!(find_kth(&values, 5).unwrap(), 9);
/// ```
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(n)
pub fn find_kth<T>(items: &[T], k: usize) -> Result<T>
where
    T: Ord + Clone,
{
    find_kth_by(items, k, |a, b| a.cmp(b))
}

/// Returns the `k`-th smallest element of `items` under the ordering given by
/// `compare`, which must be a total order.
///
/// # Examples
/// ```
/// use threshold_select::find_kth_by;
///
/// let samples = [2.5, -1.0, 7.25, 0.0];
/// let second = find_kth_by(&samples, 1, |a: &f64, b: &f64| a.total_cmp(b)).unwrap();
/// assert_eq!(second, 0.0);
/// ```
pub fn find_kth_by<T, F>(items: &[T], k: usize, mut compare: F) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.is_empty() {
        return Err(Error::EmptyInput);
    }
    if k >= items.len() {
        return Err(Error::IndexOutOfBounds {
            index: k,
            len: items.len(),
        });
    }
    select(items.to_vec(), k, &mut compare, 0)
}

/// Returns the `k`-th smallest element of `items` ordered by the key that
/// `key` extracts.
pub fn find_kth_by_key<T, K, F>(items: &[T], k: usize, mut key: F) -> Result<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    find_kth_by(items, k, |a, b| key(a).cmp(&key(b)))
}

// The descent into a partition is a loop; only pivot selection recurses, and
// always on at most a fifth of the current collection, so `depth` stays
// below log5(n).
fn select<T, F>(mut work: Vec<T>, mut k: usize, compare: &mut F, depth: usize) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let n = work.len();
        if k >= n {
            return Err(Error::IndexOutOfBounds { index: k, len: n });
        }

        if k == 0 {
            return extreme(work, compare, Ordering::Less);
        }
        if k == n - 1 {
            return extreme(work, compare, Ordering::Greater);
        }
        if n <= SMALL_COLLECTION {
            work.sort_by(|a, b| compare(a, b));
            return Ok(work.swap_remove(k));
        }

        let pivot = median_of_medians(&work, compare, depth)?;

        let mut less = Vec::with_capacity(n / 2);
        let mut greater = Vec::with_capacity(n / 2);
        let mut equal = Vec::new();
        for item in work {
            match compare(&item, &pivot) {
                Ordering::Less => less.push(item),
                Ordering::Greater => greater.push(item),
                Ordering::Equal => equal.push(item),
            }
        }

        // Spread ties over both sides so runs of duplicates cannot starve
        // one partition.
        for item in equal {
            if less.len() < greater.len() {
                less.push(item);
            } else {
                greater.push(item);
            }
        }

        trace!(
            "depth {}: split {} elements into {} / {} for rank {}",
            depth,
            n,
            less.len(),
            greater.len(),
            k
        );

        if k < less.len() {
            work = less;
        } else {
            k -= less.len();
            work = greater;
        }
    }
}

/// Median of the medians of every full group of `GROUP_SIZE`; a trailing
/// partial group is skipped.
fn median_of_medians<T, F>(work: &[T], compare: &mut F, depth: usize) -> Result<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut medians = Vec::with_capacity(work.len() / GROUP_SIZE);
    for group in work.chunks_exact(GROUP_SIZE) {
        let mut group = group.to_vec();
        group.sort_by(|a, b| compare(a, b));
        medians.push(group.swap_remove(GROUP_SIZE / 2));
    }
    let mid = medians.len() / 2;
    select(medians, mid, compare, depth + 1)
}

/// Linear scan for the smallest (`Less`) or largest (`Greater`) element.
fn extreme<T, F>(work: Vec<T>, compare: &mut F, wanted: Ordering) -> Result<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    work.into_iter()
        .reduce(|best, item| {
            if compare(&item, &best) == wanted {
                item
            } else {
                best
            }
        })
        .ok_or(Error::EmptyInput)
}
