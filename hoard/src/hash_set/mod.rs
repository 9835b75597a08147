//! Unordered set of unique elements with bucket chaining.
//!
//! Every element is stored in the bucket keyed by its full 64-bit hash code. Elements whose codes
//! coincide share a bucket and are told apart with the set's comparer.
mod core;
pub use self::core::*;
mod algebra;
mod ctors;
mod search;
mod set;
mod traverse;
