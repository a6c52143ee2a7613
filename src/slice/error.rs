use std::fmt::{self, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index that doesn't address a valid position in a slice of length `len`.
///
/// The index is kept signed so that negative indices can be reported as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: isize,
    /// The length of the slice at the time of the request.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for slice with {} elements!", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// A chunk size that can't split a slice, because it isn't strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChunkSize {
    /// The size that was requested.
    pub size: isize,
}

impl fmt::Display for InvalidChunkSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk size {} is not positive!", self.size)
    }
}

impl std::error::Error for InvalidChunkSize {}

/// Any error produced by the fallible slice operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SliceError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`InvalidChunkSize`].
    InvalidChunkSize(InvalidChunkSize),
}
