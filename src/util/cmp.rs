use std::cmp::Ordering;

/// Lifts a strict less-than comparator into a total [`Ordering`], treating a pair where neither
/// side is less as equal. Sorting with the result keeps equal elements in their original order
/// when the sort itself is stable.
pub fn ordering_from_less<T, F>(mut less: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    move |a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
