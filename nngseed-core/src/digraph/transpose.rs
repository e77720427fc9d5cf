//! Counting-sort transposition.

use crate::error::Result;

use super::core::Digraph;
use super::vertex::Vertex;

impl Digraph {
    /// Returns the transpose of this digraph: an arc `u -> v` in the result
    /// exists for every arc `v -> u` in `self`.
    ///
    /// Two passes over the arc list: the first computes the transposed
    /// `tail_ptr` via a cumulative sum of in-degrees, the second scatters
    /// each arc into its destination row while advancing a per-row cursor
    /// reused from the cumulative-sum pass.
    ///
    /// # Errors
    /// Returns [`crate::error::GraphError::AllocationFailure`] if the result
    /// cannot be allocated.
    pub fn transpose(&self) -> Result<Self> {
        if self.vertices == 0 {
            return Self::empty(0, 0);
        }

        let used = self.used_arcs();
        let mut row_cursor = vec![0usize; self.vertices + 1];
        for arc in &self.head[..used] {
            row_cursor[arc.index() + 1] += 1;
        }
        for v in 1..=self.vertices {
            row_cursor[v] += row_cursor[v - 1];
        }

        let mut out = Self::init(self.vertices, used)?;
        out.tail_ptr.copy_from_slice(&row_cursor);

        for v in 0..self.vertices {
            for &arc in self.row(v) {
                let slot = row_cursor[arc.index()];
                out.head[slot] = Vertex::new(v);
                row_cursor[arc.index()] += 1;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_set(dg: &Digraph, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = dg.row(v).iter().map(Vertex::index).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn transpose_reverses_arcs() {
        // n=4, tail_ptr=[0,2,3,3,5], head=[1,2, 0, 1,3]
        let heads = [1usize, 2, 0, 1, 3].map(Vertex::new);
        let mut dg = Digraph::init(4, 5).expect("init must succeed");
        dg.tail_ptr.copy_from_slice(&[0, 2, 3, 3, 5]);
        dg.head.copy_from_slice(&heads);

        let t = dg.transpose().expect("transpose must succeed");
        assert_eq!(row_set(&t, 0), vec![1, 3]);
        assert_eq!(row_set(&t, 1), vec![0, 2]);
        assert_eq!(row_set(&t, 2), vec![0]);
        assert_eq!(row_set(&t, 3), vec![3]);
    }

    #[test]
    fn transpose_of_transpose_preserves_row_sets() {
        let heads = [1usize, 2, 0, 1, 3].map(Vertex::new);
        let mut dg = Digraph::init(4, 5).expect("init must succeed");
        dg.tail_ptr.copy_from_slice(&[0, 2, 3, 3, 5]);
        dg.head.copy_from_slice(&heads);

        let back = dg
            .transpose()
            .expect("transpose must succeed")
            .transpose()
            .expect("transpose must succeed");

        for v in 0..4 {
            assert_eq!(row_set(&dg, v), row_set(&back, v));
        }
    }

    #[test]
    fn transpose_of_empty_digraph_is_empty() {
        let dg = Digraph::empty(0, 0).expect("empty must succeed");
        let t = dg.transpose().expect("transpose must succeed");
        assert_eq!(t.vertices(), 0);
    }

    #[test]
    fn transpose_of_identity_is_identity() {
        let dg = Digraph::identity(5).expect("identity must succeed");
        let t = dg.transpose().expect("transpose must succeed");
        for v in 0..5 {
            assert_eq!(row_set(&t, v), vec![v]);
        }
    }
}
