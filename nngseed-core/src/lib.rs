//! Size-constrained clustering core: a compressed sparse row directed-graph
//! substrate, an exclusion-graph builder, an in-degree bucket sort, a
//! five-strategy seed-finding engine, and two post-seed assignment
//! completers.
//!
//! This crate is deliberately narrow. It has no opinion on how a nearest
//! neighbour graph is produced, what distance metric informed it, how a
//! dataset is represented, or how results reach a user — those are a
//! caller's concerns. What it owns is the graph arithmetic and greedy
//! seed-selection logic that size-constrained clustering is built from.
//!
//! Everything here is synchronous, single-threaded, and allocation-only
//! (no interior mutability, no shared ownership): every fallible path
//! returns [`error::GraphError`] rather than aborting or panicking, with
//! the sole exception of indexing with an out-of-range vertex id, which is
//! a caller bug the same way indexing a `Vec` out of bounds is.

pub mod assign;
pub mod clustering;
pub mod digraph;
pub mod error;
pub mod exclusion;
pub mod memory;
pub mod seeds;
pub mod sort;

pub use crate::assign::{assign_remaining_keep_even, assign_remaining_lexical};
pub use crate::clustering::{ClusterIndex, Clustering};
pub use crate::digraph::{Digraph, Vertex};
pub use crate::error::{GraphError, GraphErrorCode, Result};
pub use crate::exclusion::build_exclusion_graph;
pub use crate::memory::{estimate_product_bytes, estimate_union_bytes, format_bytes};
pub use crate::seeds::{get_seed_clustering, SeedStrategy};
pub use crate::sort::InDegreeSort;
