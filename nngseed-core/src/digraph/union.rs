//! Row-wise deduplicated union of several digraphs.

use tracing::{instrument, warn};

use crate::error::{GraphError, Result};

use super::core::Digraph;
use super::vertex::Vertex;

/// Sentinel used to stamp `row_markers`; distinct from [`Vertex::SENTINEL`]
/// because it marks "not yet seen in this row", not "arc removed".
const UNSTAMPED: usize = usize::MAX;

/// Runs the row-wise dedup scan shared by union's sizing pass and write
/// pass. When `out` is `None`, only counts; when `Some`, also writes heads
/// into `out_head` and offsets into `out_tail_ptr`.
fn scan_union(
    vertices: usize,
    graphs: &[&Digraph],
    row_markers: &mut [usize],
    out: Option<(&mut [usize], &mut [Vertex])>,
) -> usize {
    row_markers.fill(UNSTAMPED);
    let mut counter = 0usize;
    let (mut out_tail_ptr, mut out_head) = match out {
        Some((tp, h)) => (Some(tp), Some(h)),
        None => (None, None),
    };
    if let Some(tp) = out_tail_ptr.as_deref_mut() {
        tp[0] = 0;
    }

    for v in 0..vertices {
        for graph in graphs {
            for &head in graph.row(v) {
                let idx = head.index();
                if row_markers[idx] != v {
                    row_markers[idx] = v;
                    if let Some(out_head) = out_head.as_deref_mut() {
                        out_head[counter] = head;
                    }
                    counter += 1;
                }
            }
        }
        if let Some(tp) = out_tail_ptr.as_deref_mut() {
            tp[v + 1] = counter;
        }
    }

    counter
}

impl Digraph {
    /// Returns the row-wise union of `graphs`: for each vertex `v`, the set
    /// of heads appearing in any input graph's row `v`, deduplicated.
    ///
    /// Uses a two-phase allocate-or-recount strategy: first assumes the
    /// output needs at most the sum of input row sizes and tries to
    /// allocate that; if allocation fails, recomputes the exact dedup count
    /// (same scan, no writes) and retries once. Logs a warning on the
    /// fallback path since it indicates the graph did not fit the fast-path
    /// estimate.
    ///
    /// An empty `graphs` list returns an empty (zero-vertex) digraph rather
    /// than an error, since there is no vertex count to disagree about.
    ///
    /// # Errors
    /// Returns [`GraphError::SizeMismatch`] if any two inputs have
    /// different vertex counts, and [`GraphError::AllocationFailure`] if
    /// both the fast estimate and the exact recount fail to allocate.
    #[instrument(level = "trace", skip(graphs))]
    pub fn union(graphs: &[&Digraph]) -> Result<Self> {
        let Some(&first) = graphs.first() else {
            return Self::empty(0, 0);
        };
        let vertices = first.vertices();
        for graph in graphs {
            if graph.vertices() != vertices {
                return Err(GraphError::SizeMismatch {
                    left: vertices,
                    right: graph.vertices(),
                });
            }
        }

        let mut row_markers = vec![UNSTAMPED; vertices];
        let upper_bound: usize = graphs.iter().map(|g| g.used_arcs()).sum();

        match Self::init(vertices, upper_bound) {
            Ok(mut out) => {
                let used = scan_union(
                    vertices,
                    graphs,
                    &mut row_markers,
                    Some((&mut out.tail_ptr, &mut out.head)),
                );
                out.resize_arcs(used)?;
                Ok(out)
            }
            Err(_) => {
                warn!(
                    upper_bound,
                    "union fast-path allocation failed, recounting exact output size"
                );
                let exact = scan_union(vertices, graphs, &mut row_markers, None);
                let mut out = Self::init(vertices, exact)?;
                scan_union(
                    vertices,
                    graphs,
                    &mut row_markers,
                    Some((&mut out.tail_ptr, &mut out.head)),
                );
                Ok(out)
            }
        }
    }
}
