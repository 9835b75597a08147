//! Fail-fast iterators shared by every container.
//!
//! An [`Iter`] snapshots the container's modification version when it is created. Every advance
//! and every [`Element`] access re-validates the snapshot and reports
//! [`hoard_core::HoardError::ConcurrentModification`] on mismatch instead of reading a container
//! that changed underneath it.
mod element;
pub use element::*;
mod iter;
pub use iter::*;
