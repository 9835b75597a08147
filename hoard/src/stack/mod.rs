//! LIFO stack on a contiguous backing store.
//!
//! Logical order runs from the top of the stack to the bottom: logical index 0 is the element
//! [`Stack::pop`] returns next, and forward iteration visits elements in pop order.
mod core;
pub use self::core::*;
mod ops;
mod traverse;
