//! Functions over slices and Vecs.
//!
//! Grouped loosely by what they do:
//! - Transformation: [`map`], [`for_each`], [`filter`], [`flatten`], [`concat`], [`reverse`],
//!   [`to_map`], [`group_by`].
//! - Searching: [`first`], [`last`], [`first_index`], [`contains`], [`count`], [`all_match`],
//!   [`any_match`].
//! - Aggregation: [`min`], [`max`], [`sum`], [`reduce`].
//! - Ordering and deduplication: [`order_by`], [`sort`], [`uniq`], [`uniq_by`].
//! - Restructuring: [`insert`], [`remove`], [`pop`], [`append`], [`prepend`], [`chunk`], along
//!   with the fallible [`try_insert`], [`try_remove`] and [`try_chunk`].
//! - Predicates: [`is_zero`], [`is_not_zero`], [`is_positive`], [`is_negative`].
//!
//! Read-only functions take `&[T]` and return a freshly allocated Vec, cloning elements where
//! needed. [`sort`] is the exception, sorting a `&mut [T]` in place. [`pop`], [`append`] and
//! [`prepend`] take an owned Vec, since they exist to grow or shrink one.
//!
//! Indices are `isize` so that a negative index can be passed and handled as out of range, rather
//! than having to be checked by the caller first.
//!
//! Deduplication and grouping are `O(n)`, using a [`HashSet`](std::collections::HashSet) or
//! [`HashMap`](std::collections::HashMap) to remember keys. The output order always follows the
//! input slice, never the hashed collection.

mod aggregate;
mod edit;
mod error;
mod order;
mod predicate;
mod search;
mod transform;


pub use aggregate::*;
pub use edit::*;
pub use error::*;
pub use order::*;
pub use predicate::*;
pub use search::*;
pub use transform::*;
