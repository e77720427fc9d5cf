//! Digraph construction, storage management, and row access.

use tracing::warn;

use crate::error::{GraphError, Result};

use super::vertex::Vertex;

/// A directed graph over `{0..vertices}` in compressed sparse row layout.
///
/// Arcs of tail `v` occupy `head[tail_ptr[v]..tail_ptr[v + 1])`. Self-loops
/// are permitted; multi-arcs are permitted by layout but eliminated per-row
/// by [`Digraph::union`](super::Digraph::union) and
/// [`Digraph::adjacency_product`](super::Digraph::adjacency_product).
///
/// `head` is kept at exactly `max_arcs` length; `tail_ptr[vertices]` is the
/// *used* arc count, tracked separately from capacity so
/// [`resize_arcs`](Digraph::resize_arcs) can grow or shrink storage without
/// touching used entries.
#[derive(Clone, Debug)]
pub struct Digraph {
    pub(super) vertices: usize,
    pub(super) tail_ptr: Vec<usize>,
    pub(super) head: Vec<Vertex>,
}

impl Digraph {
    /// The largest vertex count a digraph can hold.
    ///
    /// One below [`Vertex::SENTINEL`]'s index, so every legal vertex id
    /// remains strictly less than the sentinel.
    pub const MAX_VERTICES: usize = Vertex::SENTINEL.index();

    fn check_vertex_count(vertices: usize) -> Result<()> {
        if vertices > Self::MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                got: vertices,
                max: Self::MAX_VERTICES,
            });
        }
        Ok(())
    }

    /// Allocates storage for `vertices` vertices and `max_arcs` arc slots.
    /// `tail_ptr` entries are left at `0` (this implementation never leaves
    /// memory semantically uninitialized the way the source's `malloc`-based
    /// `tbg_init_digraph` does; see [`Digraph::empty`] for the
    /// all-empty-rows constructor spec.md names separately).
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if `vertices` exceeds
    /// [`Digraph::MAX_VERTICES`], and [`GraphError::AllocationFailure`] if
    /// the arc buffer cannot be reserved.
    pub fn init(vertices: usize, max_arcs: usize) -> Result<Self> {
        Self::check_vertex_count(vertices)?;
        let mut head = Vec::new();
        head.try_reserve_exact(max_arcs)
            .map_err(|_| GraphError::AllocationFailure { requested: max_arcs })?;
        head.resize(max_arcs, Vertex::SENTINEL);
        Ok(Self {
            vertices,
            tail_ptr: vec![0; vertices + 1],
            head,
        })
    }

    /// Allocates an empty digraph (every row has zero arcs).
    ///
    /// # Errors
    /// See [`Digraph::init`].
    pub fn empty(vertices: usize, max_arcs: usize) -> Result<Self> {
        Self::init(vertices, max_arcs)
    }

    /// Builds the self-loop-only digraph (`v -> v` for every vertex).
    ///
    /// # Errors
    /// See [`Digraph::init`].
    pub fn identity(vertices: usize) -> Result<Self> {
        let mut dg = Self::init(vertices, vertices)?;
        for v in 0..vertices {
            dg.tail_ptr[v] = v;
            dg.head[v] = Vertex::new(v);
        }
        dg.tail_ptr[vertices] = vertices;
        Ok(dg)
    }

    /// Wraps an externally-produced regular NNG: a caller-supplied `heads`
    /// buffer of length `vertices * arcs_per_vertex`, `k` outgoing arcs per
    /// vertex, ownership transferred into the returned digraph.
    ///
    /// # Errors
    /// Returns [`GraphError::TooManyVertices`] if `vertices` exceeds
    /// [`Digraph::MAX_VERTICES`], and [`GraphError::SizeMismatch`] if
    /// `heads.len() != vertices * arcs_per_vertex`.
    pub fn balanced(vertices: usize, arcs_per_vertex: usize, heads: Vec<Vertex>) -> Result<Self> {
        Self::check_vertex_count(vertices)?;
        let expected = vertices.saturating_mul(arcs_per_vertex);
        if heads.len() != expected {
            return Err(GraphError::SizeMismatch {
                left: heads.len(),
                right: expected,
            });
        }
        let mut tail_ptr = Vec::with_capacity(vertices + 1);
        for v in 0..=vertices {
            tail_ptr.push(v * arcs_per_vertex);
        }
        Ok(Self {
            vertices,
            tail_ptr,
            head: heads,
        })
    }

    /// Deep-copies this digraph, with output capacity equal to the used arc
    /// count (spare capacity in `self.head` is not carried over).
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailure`] if the copy cannot be
    /// allocated.
    pub fn to_owned_copy(&self) -> Result<Self> {
        let used = self.used_arcs();
        let mut dg = Self::init(self.vertices, used)?;
        dg.tail_ptr.copy_from_slice(&self.tail_ptr);
        dg.head.copy_from_slice(&self.head[..used]);
        Ok(dg)
    }

    /// Grows or shrinks arc storage. Succeeds only if `new_max_arcs` is at
    /// least the current used arc count; `new_max_arcs = 0` frees the head
    /// buffer entirely.
    ///
    /// # Errors
    /// Returns [`GraphError::Truncation`] if `new_max_arcs` is smaller than
    /// the used arc count, and [`GraphError::AllocationFailure`] if growth
    /// cannot be allocated.
    pub fn resize_arcs(&mut self, new_max_arcs: usize) -> Result<()> {
        let used = self.used_arcs();
        if new_max_arcs < used {
            return Err(GraphError::Truncation {
                requested: new_max_arcs,
                used,
            });
        }
        if new_max_arcs == self.head.len() {
            return Ok(());
        }
        if new_max_arcs == 0 {
            self.head = Vec::new();
            return Ok(());
        }
        let additional = new_max_arcs.saturating_sub(self.head.len());
        if additional > 0 {
            self.head
                .try_reserve_exact(additional)
                .map_err(|_| {
                    warn!(requested = new_max_arcs, "arc storage reservation failed");
                    GraphError::AllocationFailure {
                        requested: new_max_arcs,
                    }
                })?;
        }
        self.head.resize(new_max_arcs, Vertex::SENTINEL);
        Ok(())
    }

    /// Returns the vertex count.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the arc storage capacity.
    #[must_use]
    pub fn max_arcs(&self) -> usize {
        self.head.len()
    }

    /// Returns the number of arcs currently in use (`tail_ptr[vertices]`).
    #[must_use]
    pub fn used_arcs(&self) -> usize {
        self.tail_ptr[self.vertices]
    }

    /// Returns the out-neighbours of `v` as a slice.
    ///
    /// # Panics
    /// Panics if `v >= self.vertices()`, mirroring indexing into any other
    /// `Vec`-backed adjacency structure in this crate.
    #[must_use]
    pub fn row(&self, v: usize) -> &[Vertex] {
        &self.head[self.tail_ptr[v]..self.tail_ptr[v + 1]]
    }

    /// Returns the `tail_ptr` offset array (length `vertices + 1`).
    #[must_use]
    pub fn tail_ptr(&self) -> &[usize] {
        &self.tail_ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_allocates_requested_capacity() {
        let dg = Digraph::init(4, 10).expect("init must succeed");
        assert_eq!(dg.vertices(), 4);
        assert_eq!(dg.max_arcs(), 10);
    }

    #[test]
    fn empty_digraph_has_zero_length_rows() {
        let dg = Digraph::empty(5, 0).expect("empty must succeed");
        for v in 0..5 {
            assert!(dg.row(v).is_empty());
        }
        assert_eq!(dg.used_arcs(), 0);
    }

    #[test]
    fn identity_digraph_is_self_loops() {
        let dg = Digraph::identity(3).expect("identity must succeed");
        for v in 0..3 {
            assert_eq!(dg.row(v), &[Vertex::new(v)]);
        }
    }

    #[test]
    fn balanced_digraph_wraps_heads() {
        let heads = vec![
            Vertex::new(1),
            Vertex::new(2),
            Vertex::new(0),
            Vertex::new(2),
        ];
        let dg = Digraph::balanced(2, 2, heads).expect("balanced must succeed");
        assert_eq!(dg.row(0), &[Vertex::new(1), Vertex::new(2)]);
        assert_eq!(dg.row(1), &[Vertex::new(0), Vertex::new(2)]);
    }

    #[test]
    fn balanced_digraph_rejects_mismatched_heads_len() {
        let err = Digraph::balanced(2, 2, vec![Vertex::new(0)]).expect_err("must fail");
        assert!(matches!(err, GraphError::SizeMismatch { .. }));
    }

    #[test]
    fn copy_right_sizes_capacity_to_used_arcs() {
        let dg = Digraph::identity(3).expect("identity must succeed");
        let copy = dg.to_owned_copy().expect("copy must succeed");
        assert_eq!(copy.max_arcs(), copy.used_arcs());
        assert_eq!(copy.row(0), dg.row(0));
    }

    #[test]
    fn resize_arcs_refuses_to_truncate_used_arcs() {
        let dg = Digraph::identity(4).expect("identity must succeed");
        let mut dg = dg;
        let err = dg.resize_arcs(2).expect_err("must refuse truncation");
        assert!(matches!(err, GraphError::Truncation { .. }));
        assert_eq!(dg.max_arcs(), 4);
    }

    #[test]
    fn resize_arcs_grows_and_shrinks_to_zero() {
        let mut dg = Digraph::empty(3, 10).expect("empty must succeed");
        dg.resize_arcs(20).expect("grow must succeed");
        assert_eq!(dg.max_arcs(), 20);
        dg.resize_arcs(0).expect("shrink to zero must succeed");
        assert_eq!(dg.max_arcs(), 0);
    }
}
