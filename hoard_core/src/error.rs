//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoardError {
    /// A circular buffer was requested with a capacity that cannot hold a single element.
    #[error("Capacity must be at least 1, got {capacity}.")]
    InvalidCapacity { capacity: usize },
    /// A hash set was requested with buckets that cannot hold a single element.
    #[error("Bucket capacity must be at least 1.")]
    InvalidBucketCapacity,
    /// An element was requested from an empty container through a non-`try` accessor.
    #[error("Container is empty.")]
    Empty,
    /// The container was structurally modified after the iterator (or element view) was created.
    #[error("Container modified during iteration: expected version {expected}, found {found}.")]
    ConcurrentModification { expected: u64, found: u64 },
}

/// Verifies that `found` matches the `expected` version snapshot.
#[inline]
pub fn check_version(expected: u64, found: u64) -> Result<(), HoardError> {
    if expected == found {
        Ok(())
    } else {
        Err(HoardError::ConcurrentModification { expected, found })
    }
}
