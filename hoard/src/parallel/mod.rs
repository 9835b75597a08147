//! Partition-and-merge implementations of linear reductions.
//!
//! Containers call the gated entry points ([`min`], [`max`], [`index_of`], [`last_index_of`])
//! with their concurrency opt-in; the parallel path is taken only for inputs of at least
//! [`PARALLEL_THRESHOLD`] elements, below which a single scan beats the coordination overhead.
mod reduce;
pub use reduce::*;
