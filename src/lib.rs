//! Generic helpers for the three containers that show up everywhere: slices, hash maps and
//! optional references.
//!
//! # Purpose
//! Iterator adaptors cover most of this ground already, but a lot of call sites just want the
//! answer: the unique elements of a slice, a slice grouped by some key, two maps merged together,
//! the value behind an optional reference or some fallback. This crate wraps those up as plain
//! functions so they read the same everywhere they're used.
//!
//! # Method
//! Every function here is a total function. Degenerate input (an empty slice, an index out of
//! range, a chunk size of zero) resolves to a documented default rather than a panic or an error.
//! Where the default would hide something a caller cares about, there is a `try_` variant that
//! reports it instead, see [`slice::try_insert`] for example.
//!
//! Functions either leave their input alone and allocate a new container, or take the container
//! mutably (or by value) and hand back the same one. Each function's docs say which:
//! [`slice::sort`] sorts in place, while [`slice::order_by`] sorts a copy.
//!
//! # Error Handling
//! The total functions don't have errors to report. The `try_` functions use small structs that
//! implement [`Error`](std::error::Error), which are collected into an enum for static dispatch
//! (see [`slice::SliceError`]).
//!
//! # Zero Values
//! When a function has nothing to return (the minimum of an empty slice, the last element of an
//! empty slice) it returns [`Default::default`], and says so. This is the reason for the
//! `T: Default` bounds dotted around the crate. Where the caller needs to distinguish "nothing"
//! from a real default-valued element, the function also returns a `bool`.
//!
//! # Features
//! Each module sits behind a feature of the same name. All of them are enabled by default.

#![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "map")]
pub mod map;
#[cfg(feature = "ptr")]
pub mod ptr;
#[cfg(feature = "slice")]
pub mod slice;
#[cfg(feature = "traits")]
pub mod traits;

pub(crate) mod util;
