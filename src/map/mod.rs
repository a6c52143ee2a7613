//! Functions over [`HashMap`](std::collections::HashMap)s.
//!
//! Inputs are generic over the map's hasher, so maps built with a custom
//! [`BuildHasher`](std::hash::BuildHasher) are accepted anywhere. Freshly built outputs use the
//! default hasher, except for [`clone`], which keeps the hasher of its input.
//!
//! A HashMap has no meaningful order, so neither do the Vecs returned by [`keys`] and [`values`],
//! and when [`map()`] sends two entries to the same key, which one survives is unspecified.
//! [`merge`] on the other hand is fully ordered by its arguments.
//!
//! [`clear`] and [`map_in_place`] modify the map they are given. Everything else leaves its input
//! alone.

mod hash_map;

mod tests;

pub use hash_map::*;
