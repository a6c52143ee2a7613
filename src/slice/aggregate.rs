use crate::traits::Number;

/// Returns a clone of the smallest element of `slice` according to the strict less-than
/// comparator `less`. When several elements are equally small, the first of them is returned.
///
/// An empty slice produces the zero value of `T`. There is no separate "not found" signal, so
/// check for an empty slice beforehand if the zero value is also a valid minimum.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::min(&[3, 1, 2], |a, b| a < b), 1);
/// assert_eq!(slice::min(&[] as &[i32], |a, b| a < b), 0);
/// ```
pub fn min<T, F>(slice: &[T], mut less: F) -> T
where
    T: Clone + Default,
    F: FnMut(&T, &T) -> bool,
{
    extreme(slice, |candidate, current| less(candidate, current))
}

/// Returns a clone of the largest element of `slice` according to the strict less-than
/// comparator `less`. When several elements are equally large, the first of them is returned.
///
/// Like [`min`], an empty slice produces the zero value of `T`.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::max(&["pear", "apple", "plum"], |a, b| a < b), "plum");
/// assert_eq!(slice::max(&[] as &[&str], |a, b| a < b), "");
/// ```
pub fn max<T, F>(slice: &[T], mut less: F) -> T
where
    T: Clone + Default,
    F: FnMut(&T, &T) -> bool,
{
    extreme(slice, |candidate, current| less(current, candidate))
}

/// Scans for the element that `replaces` prefers over every other, keeping the earliest on ties.
fn extreme<T, F>(slice: &[T], mut replaces: F) -> T
where
    T: Clone + Default,
    F: FnMut(&T, &T) -> bool,
{
    let Some((head, tail)) = slice.split_first() else {
        return T::default();
    };

    tail.iter()
        .fold(head, |current, candidate| {
            if replaces(candidate, current) { candidate } else { current }
        })
        .clone()
}

/// Sums the values that `f` extracts from each element of `slice`, starting from zero. An empty
/// slice sums to zero.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// let items = [("apple", 3_u32), ("pear", 4)];
/// assert_eq!(slice::sum(&items, |(_, qty)| *qty), 7);
/// assert_eq!(slice::sum(&[0.5, 1.25], |f| *f), 1.75);
/// assert_eq!(slice::sum(&[] as &[i64], |i| *i), 0);
/// ```
pub fn sum<T, E, F>(slice: &[T], mut f: F) -> E
where
    E: Number,
    F: FnMut(&T) -> E,
{
    slice.iter().fold(E::zero(), |acc, item| acc + f(item))
}

/// Left-folds `combine` over every element of `slice`, seeded with the zero value of `T`.
///
/// Every element is folded in, the first included, so the result is
/// `combine(...combine(combine(zero, s[0]), s[1])..., s[n-1])`. An empty slice produces the zero
/// value. For combining functions where the zero value isn't an identity (such as a product),
/// use [`Iterator::reduce`] instead, which seeds with the first element.
///
/// # Examples
/// ```
/// # use gkit::slice;
/// assert_eq!(slice::reduce(&[1, 2, 3, 4], |a, b| a + b), 10);
/// assert_eq!(slice::reduce(&["a", "b"].map(String::from), |a, b| a + &b), "ab");
/// assert_eq!(slice::reduce(&[] as &[i32], |a, b| a + b), 0);
/// ```
pub fn reduce<T, F>(slice: &[T], mut combine: F) -> T
where
    T: Clone + Default,
    F: FnMut(T, T) -> T,
{
    slice.iter().fold(T::default(), |acc, item| combine(acc, item.clone()))
}
