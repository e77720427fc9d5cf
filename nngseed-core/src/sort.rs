//! Bucket sort by in-degree, with an optional mutable-index mode supporting
//! O(1) incremental decrements during updating seed discovery.
//!
//! Three parallel arrays — `inwards_count`, `vertex_index`, `bucket_index` —
//! together encode a stable partition refinement: `sorted_vertices` is kept
//! sorted ascending by residual in-degree at all times, and
//! [`InDegreeSort::decrease`] is the sole mutator, so callers never touch
//! the arrays directly.

use crate::digraph::{Digraph, Vertex};

/// A bucket sort of a digraph's vertices by in-degree.
///
/// Built once via [`InDegreeSort::by_inwards`]; in "updating" mode (built
/// with `with_mutable_index = true`), [`InDegreeSort::decrease`] lets a
/// caller record that a vertex lost one inward arc, re-sorting it in O(1).
#[derive(Clone, Debug)]
pub struct InDegreeSort {
    inwards_count: Vec<u32>,
    sorted_vertices: Vec<Vertex>,
    vertex_index: Option<Vec<usize>>,
    bucket_index: Option<Vec<usize>>,
}

impl InDegreeSort {
    /// Computes in-degrees from `graph` (sentinel-valued heads excluded) and
    /// stable-sorts vertices ascending by in-degree.
    ///
    /// When `with_mutable_index` is `false`, only `sorted_vertices` is kept;
    /// the ancillary arrays needed for [`InDegreeSort::decrease`] are
    /// dropped immediately, matching the non-updating strategies that never
    /// call it.
    #[must_use]
    pub fn by_inwards(graph: &Digraph, with_mutable_index: bool) -> Self {
        let n = graph.vertices();
        let mut inwards_count = vec![0u32; n];
        for v in 0..n {
            for &head in graph.row(v) {
                if !head.is_sentinel() {
                    inwards_count[head.index()] += 1;
                }
            }
        }

        let max_in = inwards_count.iter().copied().max().unwrap_or(0) as usize;

        // Histogram, then cumulative sum to produce per-bucket *end*
        // pointers into `sorted_vertices` (one past the last slot of each
        // bucket).
        let mut bucket_end = vec![0usize; max_in + 1];
        for &count in &inwards_count {
            bucket_end[count as usize] += 1;
        }
        let mut running = 0usize;
        for end in &mut bucket_end {
            running += *end;
            *end = running;
        }

        let mut sorted_vertices = vec![Vertex::new(0); n];
        // Iterate n-1 down to 0 so that, within a bucket, original (hence
        // ascending-by-id) order is preserved: stability.
        for v in (0..n).rev() {
            let count = inwards_count[v] as usize;
            bucket_end[count] -= 1;
            sorted_vertices[bucket_end[count]] = Vertex::new(v);
        }

        if with_mutable_index {
            let mut vertex_index = vec![0usize; n];
            for (slot, &v) in sorted_vertices.iter().enumerate() {
                vertex_index[v.index()] = slot;
            }
            // `bucket_index[c]` is the *start* slot of bucket `c` (an
            // exclusive prefix sum of the histogram), not the one-past-end
            // pointer `bucket_end` above settled into. `decrease` swaps the
            // demoted vertex into this start slot, then advances it by one
            // so the bucket-c/bucket-(c-1) boundary moves right — the
            // classic Batagelj-Zaversnik bin-pointer scheme.
            let mut histogram = vec![0usize; max_in + 1];
            for &count in &inwards_count {
                histogram[count as usize] += 1;
            }
            let mut bucket_index = vec![0usize; max_in + 1];
            let mut running = 0usize;
            for (start, &count_in_bucket) in bucket_index.iter_mut().zip(histogram.iter()) {
                *start = running;
                running += count_in_bucket;
            }
            Self {
                inwards_count,
                sorted_vertices,
                vertex_index: Some(vertex_index),
                bucket_index: Some(bucket_index),
            }
        } else {
            Self {
                inwards_count,
                sorted_vertices,
                vertex_index: None,
                bucket_index: None,
            }
        }
    }

    /// Returns the vertices in ascending in-degree order.
    #[must_use]
    pub fn sorted_vertices(&self) -> &[Vertex] {
        &self.sorted_vertices
    }

    /// Returns the residual in-degree of `v`.
    #[must_use]
    pub fn inwards_count(&self, v: usize) -> u32 {
        self.inwards_count[v]
    }

    /// Returns `v`'s current slot in [`InDegreeSort::sorted_vertices`].
    ///
    /// Only meaningful in updating mode.
    #[must_use]
    pub fn vertex_index(&self, v: usize) -> Option<usize> {
        self.vertex_index.as_ref().map(|idx| idx[v])
    }

    /// Records that `v` lost one inward arc, moving it into the bucket one
    /// below its current one by swapping it with whichever vertex
    /// currently sits at that bucket's start, then advancing the
    /// bucket-count boundary by one slot.
    ///
    /// `current_pos` is the outer seed-discovery sweep's cursor into
    /// `sorted_vertices`: if the natural target slot has already been
    /// scanned past (`bucket_index[c] <= current_pos`), it is clamped to
    /// `current_pos + 1` instead, so `v` always lands somewhere the sweep
    /// will still visit rather than in a position it has already decided.
    ///
    /// # Panics
    /// Panics if this [`InDegreeSort`] was not built with
    /// `with_mutable_index = true`, or if `v`'s in-degree is already zero.
    /// Both are internal-invariant violations callers are expected to avoid
    /// (mirrors the source's use of assertions for internal invariants
    /// only).
    pub fn decrease(&mut self, v: usize, current_pos: usize) {
        let vertex_index = self
            .vertex_index
            .as_mut()
            .expect("decrease requires an InDegreeSort built with a mutable index");
        let bucket_index = self
            .bucket_index
            .as_mut()
            .expect("decrease requires an InDegreeSort built with a mutable index");

        let c = self.inwards_count[v] as usize;
        debug_assert!(c > 0, "cannot decrease a vertex already at in-degree zero");

        let from = vertex_index[v];
        let mut to = bucket_index[c];
        if to <= current_pos {
            to = current_pos + 1;
            bucket_index[c - 1] = to;
        }

        let other = self.sorted_vertices[to];
        self.sorted_vertices.swap(from, to);
        vertex_index[v] = to;
        vertex_index[other.index()] = from;

        bucket_index[c] += 1;
        self.inwards_count[v] -= 1;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::digraph::from_rows_for_test as from_rows;

    #[rstest]
    #[case::all_isolated(&[&[], &[], &[]][..], &[0, 1, 2])]
    #[case::reverse_chain(&[&[], &[0], &[1]][..], &[2, 0, 1])]
    #[case::fan_in(&[&[2], &[2], &[]][..], &[0, 1, 2])]
    #[case::complete(&[&[1, 2], &[0, 2], &[0, 1]][..], &[0, 1, 2])]
    fn sorted_vertices_orders_ascending_by_inwards_count(
        #[case] rows: &[&[usize]],
        #[case] expected: &[usize],
    ) {
        let g = from_rows(rows);
        let sort = InDegreeSort::by_inwards(&g, false);
        let got: Vec<usize> = sort.sorted_vertices().iter().map(Vertex::index).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn sorted_ascending_by_inwards_count_then_id() {
        // in-degrees: 0 <- {1}; 1 <- {0,2}; 2 <- {}; so counts = [1,1,1]
        let g = from_rows(&[&[1], &[0, 2], &[]]);
        let sort = InDegreeSort::by_inwards(&g, false);
        // All ties at count 0 (vertex 2 has no incoming arcs -> count 0),
        // vertices 0 and 1 have count 1 each.
        assert_eq!(sort.inwards_count(2), 0);
        assert_eq!(sort.inwards_count(0), 1);
        assert_eq!(sort.inwards_count(1), 1);
        // Vertex 2 (count 0) must sort before 0 and 1 (count 1); among the
        // count-1 tie, ascending vertex id (0 before 1).
        assert_eq!(sort.sorted_vertices(), &[Vertex::new(2), Vertex::new(0), Vertex::new(1)]);
    }

    #[test]
    fn decrease_moves_vertex_to_lower_bucket_and_keeps_index_consistent() {
        let g = from_rows(&[&[1, 2], &[2, 3], &[3, 4], &[4, 5], &[5, 0], &[0, 1]]);
        let mut sort = InDegreeSort::by_inwards(&g, true);
        // Every vertex has in-degree 2.
        for v in 0..6 {
            assert_eq!(sort.inwards_count(v), 2);
        }

        sort.decrease(2, 0);
        assert_eq!(sort.inwards_count(2), 1);
        let slot = sort.vertex_index(2).expect("mutable index must exist");
        assert_eq!(sort.sorted_vertices()[slot], Vertex::new(2));

        for v in 0..6 {
            let slot = sort.vertex_index(v).expect("mutable index must exist");
            assert_eq!(sort.sorted_vertices()[slot], Vertex::new(v));
        }
    }

    #[test]
    fn decrease_clamps_to_cursor_when_bucket_already_scanned() {
        let g = from_rows(&[&[1], &[2], &[0]]);
        let mut sort = InDegreeSort::by_inwards(&g, true);
        // Pretend the sweep has advanced past position 0; a decrease whose
        // natural bucket end sits at or before that cursor must clamp.
        let v = sort.sorted_vertices()[0].index();
        sort.decrease(v, 0);
        for u in 0..3 {
            let slot = sort.vertex_index(u).expect("mutable index must exist");
            assert_eq!(sort.sorted_vertices()[slot], Vertex::new(u));
        }
    }
}
