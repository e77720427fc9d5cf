//! Benchmark support crate for `nngseed`.
//!
//! Provides synthetic regular nearest-neighbour graph generation used by
//! Criterion benchmarks over the digraph substrate and the seed-finding
//! strategies.

pub mod error;
pub mod synthetic;

pub use crate::error::BenchSetupError;
pub use crate::synthetic::{generate_regular_nng, SyntheticNngConfig};
