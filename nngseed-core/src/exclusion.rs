//! Exclusion-graph construction.
//!
//! An exclusion graph encodes "cannot co-seed": an arc `u -> v` means
//! choosing both `u` and `v` as seeds in the same cluster is forbidden.

use crate::digraph::Digraph;
use crate::error::Result;

/// Builds the exclusion graph of a nearest-neighbour graph `nng`.
///
/// `E = N ∪ (N · Nᵀ)`, where the adjacency product forces the diagonal: if
/// `u` and `v` are mutual or shared-neighbour candidates, or `u` is its own
/// candidate under the product (excluded via `force_diagonal`), both
/// directions end up represented. Concretely:
///
/// 1. `t = transpose(nng)`.
/// 2. `p = adjacency_product(nng, t, force_diagonal = true, ignore_diagonal = false)`.
/// 3. `union(nng, p)`.
///
/// # Errors
/// Propagates any [`crate::error::GraphError`] from the underlying digraph
/// operations, most commonly [`crate::error::GraphError::AllocationFailure`].
pub fn build_exclusion_graph(nng: &Digraph) -> Result<Digraph> {
    let transposed = nng.transpose()?;
    let product = nng.adjacency_product(&transposed, true, false)?;
    Digraph::union(&[nng, &product])
}
