//! Generic in-memory containers sharing one protocol: pluggable comparers and hashers, fail-fast
//! versioned iteration, optional data-parallel reductions and a lock policy chosen by type.
pub mod compare;
pub mod copy;
pub mod hash_set;
pub mod hashing;
pub mod iteration;
pub mod parallel;
pub mod ring;
pub mod stack;
pub mod sync;

pub use hoard_core::{
    check_version, Comparer, Container, Direction, Hasher, HoardError, Set, SetView, Traversable,
};
