/// Returns a clone of the first element that satisfies `predicate`, along with `true`. If nothing
/// matches (including when `slice` is empty), returns the zero value of `T` and `false`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::first(&[1, 2, 3, 4], |i| *i > 2), (3, true));
/// assert_eq!(slice::first(&[1, 2], |i| *i > 2), (0, false));
/// ```
pub fn first<T, F>(slice: &[T], mut predicate: F) -> (T, bool)
where
    T: Clone + Default,
    F: FnMut(&T) -> bool,
{
    found_or_default(slice.iter().find(|item| predicate(item)))
}

/// Returns a clone of the last element that satisfies `predicate`, along with `true`. If nothing
/// matches (including when `slice` is empty), returns the zero value of `T` and `false`.
///
/// The slice is scanned from the back, so `predicate` isn't called on elements after the match.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::last(&[1, 2, 3, 4], |i| *i < 3), (2, true));
/// assert_eq!(slice::last(&[] as &[i32], |_| true), (0, false));
/// ```
pub fn last<T, F>(slice: &[T], mut predicate: F) -> (T, bool)
where
    T: Clone + Default,
    F: FnMut(&T) -> bool,
{
    found_or_default(slice.iter().rev().find(|item| predicate(item)))
}

fn found_or_default<T: Clone + Default>(found: Option<&T>) -> (T, bool) {
    match found {
        Some(item) => (item.clone(), true),
        None => (T::default(), false),
    }
}

/// Returns the index of the first element that satisfies `predicate`, along with `true`. If
/// nothing matches, returns `(-1, false)`.
///
/// The sentinel is kept alongside the flag so that the pair can be used directly as an index into
/// the other functions in this module that take signed indices, like [`remove`](super::remove),
/// where `-1` is a no-op.
///
/// A match whose index doesn't fit in an `isize` is also reported as `(-1, false)`. This can only
/// happen for a slice of zero-sized elements longer than [`isize::MAX`].
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::first_index(&[-1, -2, 3], |i| *i > 0), (2, true));
/// assert_eq!(slice::first_index(&[-1, -2, -3], |i| *i > 0), (-1, false));
/// ```
pub fn first_index<T, F>(slice: &[T], predicate: F) -> (isize, bool)
where
    F: FnMut(&T) -> bool,
{
    // A slice never holds more than isize::MAX bytes, so for any non-ZST the index fits.
    match slice.iter().position(predicate).map(isize::try_from) {
        Some(Ok(index)) => (index, true),
        _ => (-1, false),
    }
}

/// Returns true if any element of `slice` is equal to `value`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert!(slice::contains(&["a", "b"], &"b"));
/// assert!(!slice::contains(&[] as &[&str], &"b"));
/// ```
pub fn contains<T: PartialEq>(slice: &[T], value: &T) -> bool {
    slice.iter().any(|item| item == value)
}

/// Counts the elements of `slice` that satisfy `predicate`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::count(&[1, 2, 3, 4, 5], |i| i % 2 == 1), 3);
/// assert_eq!(slice::count(&[] as &[i32], |_| true), 0);
/// ```
pub fn count<T, F>(slice: &[T], mut predicate: F) -> i64
where
    F: FnMut(&T) -> bool,
{
    slice.iter().fold(0, |acc, item| if predicate(item) { acc + 1 } else { acc })
}

/// Returns true if every element of `slice` satisfies `predicate`. This is vacuously true for an
/// empty slice.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert!(slice::all_match(&[2, 4, 6], |i| i % 2 == 0));
/// assert!(slice::all_match(&[] as &[i32], |_| false));
/// ```
pub fn all_match<T, F>(slice: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    slice.iter().all(predicate)
}

/// Returns true if at least one element of `slice` satisfies `predicate`. This is always false for
/// an empty slice.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert!(slice::any_match(&[1, 4, 7], |i| i % 2 == 0));
/// assert!(!slice::any_match(&[] as &[i32], |_| true));
/// ```
pub fn any_match<T, F>(slice: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    slice.iter().any(predicate)
}
