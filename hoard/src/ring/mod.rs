//! Fixed-capacity circular buffer.
//!
//! Logical element `i` (counted from the front) lives in physical slot `(head + i) % capacity`.
//! Enqueueing into a full buffer displaces the oldest element instead of failing.
mod core;
pub use self::core::*;
mod ctors;
mod drop;
mod queue;
mod reorder;
mod search;
mod traverse;
