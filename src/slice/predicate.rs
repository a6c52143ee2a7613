//! Ready-made predicates over [`Number`]s, for use with [`filter`](super::filter),
//! [`count`](super::count) and the other predicate-taking functions.
//!
//! Each compares against the zero value of the number type.

use crate::traits::Number;

/// Returns true if `n` equals zero.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::count(&[0, 1, 0, 2], slice::is_zero), 2);
/// ```
pub fn is_zero<N: Number>(n: &N) -> bool {
    *n == N::zero()
}

/// Returns true if `n` is not equal to zero.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::filter(&[-1, 0, 1, 2], slice::is_not_zero), [-1, 1, 2]);
/// ```
pub fn is_not_zero<N: Number>(n: &N) -> bool {
    !is_zero(n)
}

/// Returns true if `n` is strictly greater than zero.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::filter(&[-1, 0, 1, 2], slice::is_positive), [1, 2]);
/// ```
pub fn is_positive<N: Number>(n: &N) -> bool {
    *n > N::zero()
}

/// Returns true if `n` is strictly less than zero.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::filter(&[-1.5, 0.0, 1.0], slice::is_negative), [-1.5]);
/// ```
pub fn is_negative<N: Number>(n: &N) -> bool {
    *n < N::zero()
}
