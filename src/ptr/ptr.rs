use std::ops::Deref;

/// Moves `value` onto the heap, returning an optional reference that holds it.
///
/// # Examples
/// ```
/// # use gkit::ptr;
/// let p = ptr::of(42);
/// assert_eq!(p.as_deref(), Some(&42));
/// ```
pub fn of<T>(value: T) -> Option<Box<T>> {
    Some(Box::new(value))
}

/// Returns a clone of the value behind `ptr`, or the zero value of `T` if there isn't one.
///
/// # Examples
/// ```
/// # use gkit::ptr;
/// assert_eq!(ptr::indirect_of(ptr::of(String::from("hi"))), "hi");
/// assert_eq!(ptr::indirect_of(Some(&7)), 7);
/// assert_eq!(ptr::indirect_of(None::<&i32>), 0);
/// ```
pub fn indirect_of<P>(ptr: Option<P>) -> P::Target
where
    P: Deref,
    P::Target: Clone + Default,
{
    ptr.map(|p| p.deref().clone()).unwrap_or_default()
}

/// Returns true if `ptr` holds nothing.
///
/// # Examples
/// ```
/// # use gkit::ptr;
/// assert!(!ptr::is_nil(&ptr::of(0)));
/// assert!(ptr::is_nil(&None::<Box<u8>>));
/// ```
pub const fn is_nil<P>(ptr: &Option<P>) -> bool {
    ptr.is_none()
}

/// Returns a clone of the value behind `ptr`, or `default` if there isn't one.
///
/// # Examples
/// ```
/// # use gkit::ptr;
/// assert_eq!(ptr::value_of(Some(&"set"), "fallback"), "set");
/// assert_eq!(ptr::value_of(None::<&&str>, "fallback"), "fallback");
/// ```
pub fn value_of<P>(ptr: Option<P>, default: P::Target) -> P::Target
where
    P: Deref,
    P::Target: Clone,
{
    match ptr {
        Some(p) => p.deref().clone(),
        None => default,
    }
}
