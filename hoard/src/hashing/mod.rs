//! Hash functions used by [`crate::hash_set::HashSet`].
//!
//! The choice of the hash function is made at compile time: element types implement
//! [`Hashable`] and [`SeededHasher`] dispatches to it, any other type needs a custom
//! [`hoard_core::Hasher`] (for example a closure wrapped in [`HashFn`]).
pub mod common;
pub mod multiply_shift;
mod hashable;
pub use hashable::*;
mod seeded;
pub use seeded::*;
