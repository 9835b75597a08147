//! Core trait and error declarations shared by the `hoard` containers.
pub mod core;
pub mod error;

pub use crate::core::*;
pub use crate::error::*;
