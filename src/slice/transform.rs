use std::collections::HashMap;
use std::hash::Hash;

/// Applies `f` to every element of `slice` in order, collecting the results into a new Vec of the
/// same length.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let lengths = slice::map(&["a", "bb", "ccc"], |s| s.len());
/// assert_eq!(lengths, [1, 2, 3]);
///
/// let empty: Vec<u8> = slice::map(&[] as &[u8], |i| i * 2);
/// assert!(empty.is_empty());
/// ```
pub fn map<T, U, F>(slice: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    slice.iter().map(f).collect()
}

/// Calls `f` on every element of `slice` in order.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let mut seen = Vec::new();
/// slice::for_each(&[3, 1, 2], |i| seen.push(*i));
/// assert_eq!(seen, [3, 1, 2]);
/// ```
pub fn for_each<T, F>(slice: &[T], f: F)
where
    F: FnMut(&T),
{
    slice.iter().for_each(f)
}

/// Returns a new Vec containing clones of the elements that satisfy `predicate`, in their
/// original relative order. An empty input, or one where nothing matches, produces an empty Vec.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let evens = slice::filter(&[-1, 0, 1, 2, 3, 4], |i| i % 2 == 0);
/// assert_eq!(evens, [0, 2, 4]);
/// ```
pub fn filter<T, F>(slice: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    slice.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Concatenates every inner slice of `slices`, in order, into a single Vec.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let flat = slice::flatten(&[vec![1, 2], vec![], vec![3, 4]]);
/// assert_eq!(flat, [1, 2, 3, 4]);
/// ```
pub fn flatten<T, S>(slices: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let len = slices.iter().map(|s| s.as_ref().len()).sum();
    let mut result = Vec::with_capacity(len);
    for inner in slices {
        result.extend_from_slice(inner.as_ref());
    }
    result
}

/// Concatenates all of the provided slices in argument order.
///
/// This is the same operation as [`flatten`], named for the call site where the slices are listed
/// out individually rather than already held together.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let a = vec![1, 2];
/// let b = [3];
/// assert_eq!(slice::concat(&[&a[..], &b[..], &[4, 5][..]]), [1, 2, 3, 4, 5]);
/// ```
pub fn concat<T, S>(slices: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    flatten(slices)
}

/// Returns a new Vec with the elements of `slice` in reverse order. The input isn't modified.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let original = [1, 2, 2, 3];
/// assert_eq!(slice::reverse(&original), [3, 2, 2, 1]);
/// assert_eq!(original, [1, 2, 2, 3]);
/// ```
pub fn reverse<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.iter().rev().cloned().collect()
}

/// Builds a HashMap from the key-value pair that `f` produces for each element.
///
/// Elements are visited in slice order and later pairs overwrite earlier ones, so when two
/// elements produce the same key, the map holds the value from the last of them.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let people = [("Alice", 30), ("Alice", 25), ("Carol", 22)];
/// let ages = slice::to_map(&people, |&(name, age)| (name, age));
/// assert_eq!(ages.len(), 2);
/// assert_eq!(ages["Alice"], 25);
/// ```
pub fn to_map<T, K, V, F>(slice: &[T], f: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnMut(&T) -> (K, V),
{
    // Collecting into a HashMap inserts in iteration order, so duplicates resolve to the last.
    slice.iter().map(f).collect()
}

/// Groups clones of the elements of `slice` by the key that `key_fn` derives from them. Within
/// each group, elements keep their relative order from `slice`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let groups = slice::group_by(&[1, 2, 3, 2, 1], |i| *i);
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups[&1], [1, 1]);
/// assert_eq!(groups[&2], [2, 2]);
/// assert_eq!(groups[&3], [3]);
/// ```
pub fn group_by<T, K, F>(slice: &[T], mut key_fn: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in slice {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}
