use super::{IndexOutOfBounds, InvalidChunkSize};

/// Returns a copy of `slice` with `elems` inserted at `index`, so that the first of `elems` ends
/// up at `index`. Any index from `0` to `slice.len()` (inclusive, to insert at the end) is valid.
///
/// An index outside of that range is a no-op: the result is an unchanged copy of `slice`. Use
/// [`try_insert`] to detect this case.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::insert(&[1, 2, 4, 5], 2, &[3]), [1, 2, 3, 4, 5]);
/// assert_eq!(slice::insert(&[1, 2], 2, &[3, 4]), [1, 2, 3, 4]);
/// assert_eq!(slice::insert(&[1, 2, 4, 5], -2, &[3]), [1, 2, 4, 5]);
/// ```
pub fn insert<T: Clone>(slice: &[T], index: isize, elems: &[T]) -> Vec<T> {
    try_insert(slice, index, elems).unwrap_or_else(|_| slice.to_vec())
}

/// Returns a copy of `slice` with `elems` inserted at `index`, or an [`IndexOutOfBounds`] error if
/// `index` isn't in the range `0..=slice.len()`.
///
/// # Examples
/// ```
/// # use gkit::slice::{self, IndexOutOfBounds};
/// assert_eq!(slice::try_insert(&['a', 'c'], 1, &['b']), Ok(vec!['a', 'b', 'c']));
/// assert_eq!(
///     slice::try_insert(&['a', 'c'], 3, &['b']),
///     Err(IndexOutOfBounds { index: 3, len: 2 }),
/// );
/// ```
pub fn try_insert<T: Clone>(
    slice: &[T],
    index: isize,
    elems: &[T],
) -> Result<Vec<T>, IndexOutOfBounds> {
    let at = checked_index(index, slice.len().saturating_add(1)).ok_or(IndexOutOfBounds {
        index,
        len: slice.len(),
    })?;

    let mut result = Vec::with_capacity(slice.len() + elems.len());
    result.extend_from_slice(&slice[..at]);
    result.extend_from_slice(elems);
    result.extend_from_slice(&slice[at..]);
    Ok(result)
}

/// Returns a copy of `slice` without the element at `index`.
///
/// An index outside of `0..slice.len()` is a no-op: the result is an unchanged copy of `slice`.
/// Use [`try_remove`] to detect this case.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::remove(&[1, 2, 3, 4], 2), [1, 2, 4]);
/// assert_eq!(slice::remove(&[1, 2, 3, 4], -2), [1, 2, 3, 4]);
/// assert_eq!(slice::remove(&[1, 2, 3, 4], 4), [1, 2, 3, 4]);
/// ```
pub fn remove<T: Clone>(slice: &[T], index: isize) -> Vec<T> {
    try_remove(slice, index).unwrap_or_else(|_| slice.to_vec())
}

/// Returns a copy of `slice` without the element at `index`, or an [`IndexOutOfBounds`] error if
/// `index` isn't in the range `0..slice.len()`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::try_remove(&[1, 2, 3], 0), Ok(vec![2, 3]));
/// assert!(slice::try_remove(&[] as &[i32], 0).is_err());
/// ```
pub fn try_remove<T: Clone>(slice: &[T], index: isize) -> Result<Vec<T>, IndexOutOfBounds> {
    let at = checked_index(index, slice.len()).ok_or(IndexOutOfBounds {
        index,
        len: slice.len(),
    })?;

    let mut result = Vec::with_capacity(slice.len() - 1);
    result.extend_from_slice(&slice[..at]);
    result.extend_from_slice(&slice[at + 1..]);
    Ok(result)
}

/// Converts a signed index into a position strictly below `bound`, if it is one.
fn checked_index(index: isize, bound: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < bound)
}

/// Removes the last element of `vec`, returning it along with the shortened Vec.
///
/// An empty Vec produces the zero value of `T` and is handed back unchanged. This consumes `vec`
/// rather than copying it, so the returned Vec is the same allocation.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::pop(vec![1, 2, 3]), (3, vec![1, 2]));
/// assert_eq!(slice::pop(Vec::<i32>::new()), (0, vec![]));
/// ```
pub fn pop<T: Default>(mut vec: Vec<T>) -> (T, Vec<T>) {
    let last = vec.pop().unwrap_or_default();
    (last, vec)
}

/// Appends every element of `elems` to the end of `vec`, returning the extended Vec.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::append(vec![1, 2], [3, 4]), [1, 2, 3, 4]);
/// ```
pub fn append<T, I>(mut vec: Vec<T>, elems: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    vec.extend(elems);
    vec
}

/// Returns a new Vec holding every element of `elems` followed by every element of `vec`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::prepend(vec![1, 2], [3, 4]), [3, 4, 1, 2]);
/// ```
pub fn prepend<T, I>(vec: Vec<T>, elems: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut result: Vec<T> = elems.into_iter().collect();
    result.extend(vec);
    result
}

/// Splits `slice` into contiguous chunks of `size` elements, in order. The final chunk holds
/// whatever is left over and may be shorter.
///
/// A `size` of zero or less produces no chunks at all, regardless of `slice`. Use [`try_chunk`] to
/// detect this case.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let nums = [1, 2, 3, 4, 5, 6];
/// assert_eq!(slice::chunk(&nums, 4), [vec![1, 2, 3, 4], vec![5, 6]]);
/// assert!(slice::chunk(&nums, -2).is_empty());
/// ```
pub fn chunk<T: Clone>(slice: &[T], size: isize) -> Vec<Vec<T>> {
    try_chunk(slice, size).unwrap_or_default()
}

/// Splits `slice` into contiguous chunks of `size` elements, or returns an [`InvalidChunkSize`]
/// error if `size` isn't positive.
///
/// # Examples
/// ```
/// # use gkit::slice::{self, InvalidChunkSize};
/// assert_eq!(slice::try_chunk(&[1, 2, 3], 2), Ok(vec![vec![1, 2], vec![3]]));
/// assert_eq!(slice::try_chunk(&[1, 2, 3], 0), Err(InvalidChunkSize { size: 0 }));
/// ```
pub fn try_chunk<T: Clone>(slice: &[T], size: isize) -> Result<Vec<Vec<T>>, InvalidChunkSize> {
    match usize::try_from(size) {
        Ok(step) if step > 0 => Ok(slice.chunks(step).map(<[T]>::to_vec).collect()),
        _ => Err(InvalidChunkSize { size }),
    }
}
