//! Functions over optional references: values that may or may not be there, held behind some
//! kind of pointer.
//!
//! An optional reference is an `Option<P>` where `P` is anything that dereferences to the value,
//! so `Option<&T>`, `Option<Box<T>>` and `Option<Rc<T>>` all work the same way. [`of`] creates
//! one that owns its value.

mod ptr;

mod tests;

pub use ptr::*;
