//! The clustering under construction: chosen seeds plus a per-vertex label.

use crate::digraph::Vertex;

/// A cluster identifier, one per discovered seed.
///
/// Mirrors the plain `usize` cluster indices of the original algorithm with
/// a typed newtype so a cluster index can never be confused with a vertex
/// id at a call site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ClusterIndex(usize);

impl ClusterIndex {
    /// Wraps a raw cluster index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A clustering in progress: which vertices are seeds, which vertices have
/// been assigned a cluster, and which cluster each assigned vertex belongs
/// to.
///
/// `cluster_label[v]` is `Some(c)` once `v` has been assigned to cluster
/// `c` (seeds are assigned to their own cluster as soon as they are
/// chosen); `assigned[v]` mirrors that but is kept as a separate flag so
/// seed-discovery code can distinguish "labelled as part of seed-finding"
/// from "fully committed to a final cluster" if those ever diverge in a
/// completer.
#[derive(Clone, Debug)]
pub struct Clustering {
    seeds: Vec<Vertex>,
    assigned: Vec<bool>,
    cluster_label: Vec<Option<ClusterIndex>>,
}

impl Clustering {
    /// Creates an empty clustering over `vertices` vertices: no seeds, no
    /// vertex assigned.
    #[must_use]
    pub fn new(vertices: usize) -> Self {
        Self::with_seed_capacity(vertices, 0)
    }

    /// Creates an empty clustering over `vertices` vertices, pre-reserving
    /// room for `seed_capacity` seeds (clamped to `vertices`, since a
    /// clustering can never hold more seeds than it has vertices). Mirrors
    /// the `seed_init_capacity` parameter of
    /// [`crate::seeds::get_seed_clustering`]: the source grows `cl.seeds` by
    /// doubling on overflow starting from this initial capacity, which
    /// `Vec::with_capacity` plus Rust's standard amortised growth gives for
    /// free.
    #[must_use]
    pub fn with_seed_capacity(vertices: usize, seed_capacity: usize) -> Self {
        Self {
            seeds: Vec::with_capacity(seed_capacity.min(vertices)),
            assigned: vec![false; vertices],
            cluster_label: vec![None; vertices],
        }
    }

    /// Number of vertices this clustering covers.
    #[must_use]
    pub fn vertices(&self) -> usize {
        self.assigned.len()
    }

    /// The seeds chosen so far, in discovery order.
    #[must_use]
    pub fn seeds(&self) -> &[Vertex] {
        &self.seeds
    }

    /// Number of clusters discovered so far.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.seeds.len()
    }

    /// Whether `v` has been assigned to a cluster.
    #[must_use]
    pub fn is_assigned(&self, v: usize) -> bool {
        self.assigned[v]
    }

    /// `v`'s cluster, if assigned.
    #[must_use]
    pub fn label(&self, v: usize) -> Option<ClusterIndex> {
        self.cluster_label[v]
    }

    /// Registers `seed` as the next cluster's representative, assigning it
    /// to its own new cluster and returning that cluster's index.
    pub fn add_seed(&mut self, seed: Vertex) -> ClusterIndex {
        let cluster = ClusterIndex::new(self.seeds.len());
        self.seeds.push(seed);
        self.assigned[seed.index()] = true;
        self.cluster_label[seed.index()] = Some(cluster);
        cluster
    }

    /// Assigns `v` to `cluster` without making it a seed.
    pub fn assign(&mut self, v: usize, cluster: ClusterIndex) {
        self.assigned[v] = true;
        self.cluster_label[v] = Some(cluster);
    }

    /// Iterates over every vertex not yet assigned to a cluster.
    pub fn unassigned(&self) -> impl Iterator<Item = usize> + '_ {
        self.assigned
            .iter()
            .enumerate()
            .filter_map(|(v, &a)| (!a).then_some(v))
    }
}
