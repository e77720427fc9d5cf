//! Shared candidate-checking, seed-registration, and neighbour-recruitment
//! logic used by every seed-finding strategy.

use crate::clustering::{ClusterIndex, Clustering};
use crate::digraph::{Digraph, Vertex};

/// Returns whether `v` is still eligible to become a seed.
///
/// `v` must be unassigned, must have at least one NNG out-neighbour (an
/// isolated vertex can never anchor a cluster), and none of its NNG
/// out-neighbours may already be assigned — accepting `v` while one of its
/// would-be recruits already belongs to another cluster would break that
/// other cluster's closed-neighbourhood disjointness. When `exclusion` is
/// supplied, `v` is also rejected if any vertex in its exclusion row has
/// already been chosen as a seed.
#[must_use]
pub(super) fn check_candidate(
    nng: &Digraph,
    v: usize,
    clustering: &Clustering,
    exclusion: Option<&Digraph>,
) -> bool {
    if clustering.is_assigned(v) {
        return false;
    }
    let row = nng.row(v);
    if row.is_empty() {
        return false;
    }
    if row.iter().any(|&u| clustering.is_assigned(u.index())) {
        return false;
    }
    match exclusion {
        None => true,
        Some(excl) => excl
            .row(v)
            .iter()
            .all(|&other| clustering.label(other.index()).is_none()),
    }
}

/// Registers `v` as a new seed and recruits its currently-unassigned
/// out-neighbours in `nng` into the same cluster.
///
/// Returns the cluster index `v` (and any recruited neighbours) now belong
/// to.
pub(super) fn add_seed(nng: &Digraph, clustering: &mut Clustering, v: Vertex) -> ClusterIndex {
    let cluster = clustering.add_seed(v);
    assign_neighbors(nng, clustering, v, cluster);
    cluster
}

/// Like [`add_seed`], but also returns every vertex just consumed (`v`
/// itself plus each recruited neighbour), so an updating strategy knows
/// exactly which vertices' outgoing arcs need their targets' in-degree
/// decremented.
pub(super) fn add_seed_tracking(nng: &Digraph, clustering: &mut Clustering, v: Vertex) -> Vec<Vertex> {
    let cluster = clustering.add_seed(v);
    let mut consumed = vec![v];
    for &neighbour in nng.row(v.index()) {
        if !clustering.is_assigned(neighbour.index()) {
            clustering.assign(neighbour.index(), cluster);
            consumed.push(neighbour);
        }
    }
    consumed
}

/// Assigns every currently-unassigned out-neighbour of `v` in `nng` to
/// `cluster`.
pub(super) fn assign_neighbors(
    nng: &Digraph,
    clustering: &mut Clustering,
    v: Vertex,
    cluster: ClusterIndex,
) {
    for &neighbour in nng.row(v.index()) {
        if !clustering.is_assigned(neighbour.index()) {
            clustering.assign(neighbour.index(), cluster);
        }
    }
}
