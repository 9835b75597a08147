//! Lock policies for the containers.
//!
//! Every container is generic over a raw reader/writer lock:
//!
//! - [`parking_lot::RawRwLock`] makes the container `Sync`: mutations take the exclusive lock for
//!   their whole duration, reads take the shared lock.
//! - [`LocalLock`] makes the container `!Sync`, so it can't be shared between threads at all, and
//!   costs a single non-atomic counter update per operation.
mod local;
pub use local::*;

pub use parking_lot::RawRwLock as SharedLock;

use parking_lot::lock_api::RawRwLockRecursive;

/// A raw lock usable as a container lock policy.
///
/// Recursive shared locking is required by set algebra, which may hold the shared lock of the
/// same set twice (`a.union(&a)`).
pub trait LockPolicy: RawRwLockRecursive {}

impl<R: RawRwLockRecursive> LockPolicy for R {}
