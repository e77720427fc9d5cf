//! `EXCLUSION_ORDER` and `EXCLUSION_UPDATING` strategies.
//!
//! Both visit candidates ordered by the *exclusion graph*'s in-degree
//! rather than the NNG's, and both reject a candidate that shares an
//! exclusion arc with an already-chosen seed. `EXCLUSION_UPDATING`
//! additionally keeps that ordering live, the same way `INWARDS_UPDATING`
//! keeps the plain in-degree ordering live.

use crate::clustering::Clustering;
use crate::digraph::Digraph;
use crate::exclusion::build_exclusion_graph;
use crate::error::Result;
use crate::sort::InDegreeSort;

use super::scaffold::{add_seed_tracking, check_candidate};

/// Seeds in ascending exclusion-graph in-degree order, rejecting any
/// candidate that would co-seed with an already-chosen seed.
///
/// # Errors
/// Propagates any [`crate::error::GraphError`] raised while building the
/// exclusion graph.
pub fn find_seeds_exclusion_order(nng: &Digraph, seed_init_capacity: usize) -> Result<Clustering> {
    let excl = build_exclusion_graph(nng)?;
    let order = InDegreeSort::by_inwards(&excl, false);
    let mut clustering = Clustering::with_seed_capacity(nng.vertices(), seed_init_capacity);
    for v in order.sorted_vertices().iter().copied() {
        if check_candidate(nng, v.index(), &clustering, Some(&excl)) {
            add_seed_tracking(nng, &mut clustering, v);
        }
    }
    Ok(clustering)
}

/// Seeds in ascending, continuously-updated exclusion-graph in-degree
/// order.
///
/// # Errors
/// Propagates any [`crate::error::GraphError`] raised while building the
/// exclusion graph.
pub fn find_seeds_exclusion_updating(
    nng: &Digraph,
    seed_init_capacity: usize,
) -> Result<Clustering> {
    let excl = build_exclusion_graph(nng)?;
    let mut sort = InDegreeSort::by_inwards(&excl, true);
    let mut clustering = Clustering::with_seed_capacity(nng.vertices(), seed_init_capacity);
    let n = nng.vertices();

    let mut pos = 0;
    while pos < n {
        let v = sort.sorted_vertices()[pos];
        if check_candidate(nng, v.index(), &clustering, Some(&excl)) {
            let consumed = add_seed_tracking(nng, &mut clustering, v);
            for u in consumed {
                for &w in excl.row(u.index()) {
                    let idx = w.index();
                    if clustering.label(idx).is_none()
                        && sort.inwards_count(idx) > 0
                        && sort.vertex_index(idx) > Some(pos)
                    {
                        sort.decrease(idx, pos);
                    }
                }
            }
        }
        pos += 1;
    }

    Ok(clustering)
}
