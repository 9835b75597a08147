//! Test utilities shared by the `hoard` crates.
#![allow(dead_code)]

pub mod generate;
pub use generate::*;

pub mod equivalence;
pub use equivalence::*;

pub mod stat;
pub use stat::*;
