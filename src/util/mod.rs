#[cfg(feature = "slice")]
pub mod cmp;
