use std::collections::HashSet;
use std::hash::Hash;

use crate::util::cmp::ordering_from_less;

/// Returns a sorted copy of `slice`, ordered by the strict less-than comparator `less`. The input
/// isn't modified.
///
/// The sort is stable: elements that `less` considers equal keep their relative order from the
/// input.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let sorted = slice::order_by(&input, |x, y| x.0 < y.0);
/// assert_eq!(sorted, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// assert_eq!(input[0], (2, 'a'));
///
/// let floats = slice::order_by(&[2.5, -1.0, 0.5], |a: &f64, b| a.total_cmp(b).is_lt());
/// assert_eq!(floats, [-1.0, 0.5, 2.5]);
/// ```
pub fn order_by<T, F>(slice: &[T], less: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = slice.to_vec();
    result.sort_by(ordering_from_less(less));
    result
}

/// Sorts `slice` in place by the natural ordering of `T`, returning the same slice.
///
/// Unlike [`order_by`], this modifies its input. The sort is stable.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let mut fruit = ["banana", "apple", "orange"];
/// slice::sort(&mut fruit);
/// assert_eq!(fruit, ["apple", "banana", "orange"]);
///
/// let mut nums = vec![3, 1, 4, 1, 5];
/// assert_eq!(slice::sort(&mut nums), [1, 1, 3, 4, 5]);
/// ```
pub fn sort<T: Ord>(slice: &mut [T]) -> &mut [T] {
    slice.sort();
    slice
}

/// Returns a copy of `slice` with duplicate elements removed, keeping the first occurrence of
/// each in its original position relative to the others.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::uniq(&[1, 2, 2, 3, 1, 3]), [1, 2, 3]);
/// assert!(slice::uniq(&[] as &[i32]).is_empty());
/// ```
pub fn uniq<T>(slice: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(slice.len());
    slice.iter().filter(|item| seen.insert(*item)).cloned().collect()
}

/// Returns a copy of `slice` keeping only the first element for each key that `key_fn` derives.
/// Survivors stay in their original relative order.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// assert_eq!(
///     slice::uniq_by(&words, |w| w.chars().next()),
///     ["apple", "banana", "cherry"],
/// );
/// ```
pub fn uniq_by<T, K, F>(slice: &[T], mut key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(slice.len());
    slice.iter().filter(|item| seen.insert(key_fn(item))).cloned().collect()
}
