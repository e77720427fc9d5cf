//! `INWARDS_UPDATING` strategy.
//!
//! Like `INWARDS_ORDER`, candidates are visited in ascending in-degree
//! order, but the in-degree count is kept live: whenever a vertex is
//! consumed (seeded or recruited), every arc it contributes is retired
//! from its targets' counts via [`InDegreeSort::decrease`], so vertices
//! that lose their last few "voters" can bubble to the front of the
//! remaining scan instead of waiting for their original, now-stale,
//! position.

use crate::clustering::Clustering;
use crate::digraph::{Digraph, Vertex};
use crate::sort::InDegreeSort;

use super::scaffold::{add_seed_tracking, check_candidate};

/// Seeds in ascending, continuously-updated in-degree order.
#[must_use]
pub fn find_seeds_inwards_updating(nng: &Digraph, seed_init_capacity: usize) -> Clustering {
    let mut clustering = Clustering::with_seed_capacity(nng.vertices(), seed_init_capacity);
    let mut sort = InDegreeSort::by_inwards(nng, true);
    let n = nng.vertices();

    let mut pos = 0;
    while pos < n {
        let v = sort.sorted_vertices()[pos];
        if check_candidate(nng, v.index(), &clustering, None) {
            let consumed = add_seed_tracking(nng, &mut clustering, v);
            for u in consumed {
                for &w in nng.row(u.index()) {
                    let idx = w.index();
                    if !clustering.is_assigned(idx)
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

    clustering
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digraph::from_rows_for_test as from_rows;

    #[test]
    fn every_vertex_ends_up_labelled() {
        // Complete mutual digraph: every vertex is an eligible candidate
        // and whichever seeds first recruits all the others at once.
        let nng = from_rows(&[&[1, 2, 3], &[0, 2, 3], &[0, 1, 3], &[0, 1, 2]]);
        let clustering = find_seeds_inwards_updating(&nng, 0);
        for v in 0..4 {
            assert!(clustering.is_assigned(v));
        }
    }

    #[test]
    fn vertex_with_empty_row_is_recruited_but_never_a_seed() {
        // Vertex 1 has no out-neighbours, so it can never satisfy
        // `check_candidate`'s `|N(v)| > 0` requirement; it is only ever
        // clustered by being recruited as vertex 0's neighbour.
        let nng = from_rows(&[&[1], &[]]);
        let clustering = find_seeds_inwards_updating(&nng, 0);
        assert!(clustering.seeds().contains(&Vertex::new(0)));
        assert!(!clustering.seeds().contains(&Vertex::new(1)));
        assert!(clustering.is_assigned(1));
    }

    #[test]
    fn consuming_a_vertex_blocks_a_competitor_sharing_its_only_neighbour() {
        // 0 -> 2, 1 -> 2: both 0 and 1 start at in-degree 0 and tie for
        // first place; whichever seeds first claims vertex 2, which makes
        // the other's only neighbour already-assigned, so it can never
        // become a seed itself. It is left for the completer pass.
        let nng = from_rows(&[&[2], &[2], &[]]);
        let clustering = find_seeds_inwards_updating(&nng, 0);
        assert!(clustering.seeds().contains(&Vertex::new(0)));
        assert!(clustering.is_assigned(2));
        assert!(!clustering.is_assigned(1));
    }
}
