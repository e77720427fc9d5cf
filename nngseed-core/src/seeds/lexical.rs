//! `LEXICAL` and `INWARDS_ORDER` strategies.
//!
//! Both scan vertices in a fixed order, computed once up front, and accept
//! every vertex that is still unassigned when its turn comes. They differ
//! only in what that order is, so they share one traversal.

use crate::clustering::Clustering;
use crate::digraph::{Digraph, Vertex};
use crate::sort::InDegreeSort;

use super::scaffold::{add_seed, check_candidate};

/// Walks `order`, seeding every still-unassigned vertex and recruiting its
/// unassigned out-neighbours.
fn seed_in_order(
    nng: &Digraph,
    seed_init_capacity: usize,
    order: impl Iterator<Item = Vertex>,
) -> Clustering {
    let mut clustering = Clustering::with_seed_capacity(nng.vertices(), seed_init_capacity);
    for v in order {
        if check_candidate(nng, v.index(), &clustering, None) {
            add_seed(nng, &mut clustering, v);
        }
    }
    clustering
}

/// Seeds in plain ascending vertex-id order.
#[must_use]
pub fn find_seeds_lexical(nng: &Digraph, seed_init_capacity: usize) -> Clustering {
    seed_in_order(nng, seed_init_capacity, (0..nng.vertices()).map(Vertex::new))
}

/// Seeds in ascending order of in-degree (vertices with fewer inward arcs
/// — hence less chance of being recruited by someone else's seed first —
/// go first).
#[must_use]
pub fn find_seeds_inwards_order(nng: &Digraph, seed_init_capacity: usize) -> Clustering {
    let sort = InDegreeSort::by_inwards(nng, false);
    seed_in_order(nng, seed_init_capacity, sort.sorted_vertices().iter().copied())
}
