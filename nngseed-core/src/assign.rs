//! Completers: assign every vertex the seed-finding phase left unlabelled.
//!
//! Both completers walk `priority` (typically the NNG itself, or a graph
//! derived from it) looking for already-labelled neighbours to recruit an
//! unassigned vertex into; they differ in which labelled neighbour they
//! prefer once more than one is available.

use std::num::NonZeroUsize;

use crate::clustering::{ClusterIndex, Clustering};
use crate::digraph::Digraph;
use crate::error::Result;

/// Assigns every unassigned vertex to the lexically-first labelled
/// neighbour it can reach through `priority`, repeating until no further
/// vertex can be resolved this way; any vertex left unreachable from every
/// seed (because `priority` does not connect it to one, directly or
/// transitively) falls into cluster `0`.
///
/// This is a deliberate divergence from spec.md §4.5, which leaves such a
/// vertex `UNLABELED`: this crate resolves towards full labelling so every
/// caller gets a complete clustering, trading the original's "unreachable
/// stays unreachable" signal for one fewer partial-result case to handle.
///
/// # Errors
/// This completer cannot itself fail; the `Result` return keeps its
/// signature uniform with [`assign_remaining_keep_even`], which can.
pub fn assign_remaining_lexical(clustering: &mut Clustering, priority: &Digraph) -> Result<()> {
    loop {
        let mut progressed = false;
        for v in clustering.unassigned().collect::<Vec<_>>() {
            if let Some(cluster) = first_labelled_neighbour(clustering, priority, v) {
                clustering.assign(v, cluster);
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    if clustering.cluster_count() > 0 {
        let fallback = ClusterIndex::new(0);
        for v in clustering.unassigned().collect::<Vec<_>>() {
            clustering.assign(v, fallback);
        }
    }

    Ok(())
}

fn first_labelled_neighbour(
    clustering: &Clustering,
    priority: &Digraph,
    v: usize,
) -> Option<ClusterIndex> {
    priority
        .row(v)
        .iter()
        .find_map(|&u| clustering.label(u.index()))
}

/// Assigns every unassigned vertex the same way as
/// [`assign_remaining_lexical`], but among a vertex's labelled neighbours
/// prefers whichever cluster is furthest from `desired_size`, so clusters
/// grow towards the same target size rather than whichever a vertex
/// happens to reach first. Vertices unreachable from any seed go to
/// whichever cluster is currently smallest.
///
/// # Errors
/// This completer cannot itself fail; the `Result` return is kept for
/// interface symmetry with other fallible completers this crate may grow.
pub fn assign_remaining_keep_even(
    clustering: &mut Clustering,
    priority: &Digraph,
    desired_size: NonZeroUsize,
) -> Result<()> {
    let desired = desired_size.get();
    let mut sizes = vec![0usize; clustering.cluster_count()];
    for v in 0..clustering.vertices() {
        if let Some(cluster) = clustering.label(v) {
            sizes[cluster.index()] += 1;
        }
    }

    loop {
        let mut progressed = false;
        for v in clustering.unassigned().collect::<Vec<_>>() {
            let candidate = priority
                .row(v)
                .iter()
                .filter_map(|&u| clustering.label(u.index()))
                .filter(|cluster| sizes[cluster.index()] < desired)
                .min_by_key(|cluster| sizes[cluster.index()]);
            if let Some(cluster) = candidate {
                clustering.assign(v, cluster);
                sizes[cluster.index()] += 1;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }

    for v in clustering.unassigned().collect::<Vec<_>>() {
        if let Some(cluster) = smallest_cluster(&sizes) {
            clustering.assign(v, cluster);
            sizes[cluster.index()] += 1;
        }
    }

    Ok(())
}

fn smallest_cluster(sizes: &[usize]) -> Option<ClusterIndex> {
    sizes
        .iter()
        .enumerate()
        .min_by_key(|&(_, &size)| size)
        .map(|(index, _)| ClusterIndex::new(index))
}
