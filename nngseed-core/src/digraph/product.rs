//! Adjacency product: `C(v) = union_{u in A(v)} B(u)`, with optional
//! diagonal handling.

use tracing::{instrument, warn};

use crate::error::{GraphError, Result};

use super::core::Digraph;
use super::vertex::Vertex;

const UNSTAMPED: usize = usize::MAX;

#[expect(
    clippy::too_many_arguments,
    reason = "mirrors the source's single scan routine; splitting would need a context struct for no real gain"
)]
fn scan_product(
    vertices: usize,
    a: &Digraph,
    b: &Digraph,
    row_markers: &mut [usize],
    force_diagonal: bool,
    ignore_diagonal: bool,
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
        if force_diagonal {
            for &head in b.row(v) {
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
        for &u in a.row(v) {
            if u.index() == v && (force_diagonal || ignore_diagonal) {
                continue;
            }
            for &head in b.row(u.index()) {
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
    /// Returns the adjacency product of `self` (A) and `other` (B): for
    /// each vertex `v`, the deduplicated union of `B(u)` for every `u` in
    /// `A(v)`.
    ///
    /// `force_diagonal` additionally emits `B(v)` first and skips any
    /// `u == v` encountered in `A(v)`; `ignore_diagonal` skips such `u`
    /// without the pre-emit. Requesting both is a contradiction.
    ///
    /// # Errors
    /// Returns [`GraphError::DiagonalConflict`] if both diagonal modifiers
    /// are set, [`GraphError::SizeMismatch`] if the operands have different
    /// vertex counts, and [`GraphError::AllocationFailure`] if neither the
    /// fast estimate nor the exact recount can be allocated.
    #[instrument(level = "trace", skip(self, other))]
    pub fn adjacency_product(
        &self,
        other: &Digraph,
        force_diagonal: bool,
        ignore_diagonal: bool,
    ) -> Result<Self> {
        if force_diagonal && ignore_diagonal {
            return Err(GraphError::DiagonalConflict);
        }
        if self.vertices() != other.vertices() {
            return Err(GraphError::SizeMismatch {
                left: self.vertices(),
                right: other.vertices(),
            });
        }
        let vertices = self.vertices();
        if vertices == 0 {
            return Self::empty(0, 0);
        }

        let mut row_markers = vec![UNSTAMPED; vertices];
        let mut upper_bound = 0usize;
        for v in 0..vertices {
            if force_diagonal {
                upper_bound += other.row(v).len();
            }
            for &u in self.row(v) {
                if u.index() == v && (force_diagonal || ignore_diagonal) {
                    continue;
                }
                upper_bound += other.row(u.index()).len();
            }
        }

        match Self::init(vertices, upper_bound) {
            Ok(mut out) => {
                let used = scan_product(
                    vertices,
                    self,
                    other,
                    &mut row_markers,
                    force_diagonal,
                    ignore_diagonal,
                    Some((&mut out.tail_ptr, &mut out.head)),
                );
                out.resize_arcs(used)?;
                Ok(out)
            }
            Err(_) => {
                warn!(
                    upper_bound,
                    "adjacency product fast-path allocation failed, recounting exact output size"
                );
                let exact = scan_product(
                    vertices,
                    self,
                    other,
                    &mut row_markers,
                    force_diagonal,
                    ignore_diagonal,
                    None,
                );
                let mut out = Self::init(vertices, exact)?;
                scan_product(
                    vertices,
                    self,
                    other,
                    &mut row_markers,
                    force_diagonal,
                    ignore_diagonal,
                    Some((&mut out.tail_ptr, &mut out.head)),
                );
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_set(dg: &Digraph, v: usize) -> Vec<usize> {
        let mut out: Vec<usize> = dg.row(v).iter().map(Vertex::index).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    fn from_rows(rows: &[&[usize]]) -> Digraph {
        let vertices = rows.len();
        let total: usize = rows.iter().map(|r| r.len()).sum();
        let mut dg = Digraph::init(vertices, total).expect("init must succeed");
        let mut offset = 0;
        dg.tail_ptr[0] = 0;
        for (v, row) in rows.iter().enumerate() {
            for &h in *row {
                dg.head[offset] = Vertex::new(h);
                offset += 1;
            }
            dg.tail_ptr[v + 1] = offset;
        }
        dg
    }

    #[test]
    fn both_diagonal_modifiers_is_an_error() {
        let g = from_rows(&[&[0]]);
        let err = g.adjacency_product(&g, true, true).expect_err("must fail");
        assert!(matches!(err, GraphError::DiagonalConflict));
    }

    #[test]
    fn identity_is_the_product_identity() {
        let g = from_rows(&[&[1], &[2], &[0]]);
        let id = Digraph::identity(3).expect("identity must succeed");
        let product = id
            .adjacency_product(&g, false, false)
            .expect("product must succeed");
        for v in 0..3 {
            assert_eq!(row_set(&product, v), row_set(&g, v));
        }
    }

    #[test]
    fn product_distributes_over_union() {
        let a = from_rows(&[&[1], &[2], &[0]]);
        let b = from_rows(&[&[0], &[1], &[2]]);
        let c = from_rows(&[&[2], &[0], &[1]]);

        let bc = Digraph::union(&[&b, &c]).expect("union must succeed");
        let left = a
            .adjacency_product(&bc, false, false)
            .expect("product must succeed");

        let ab = a
            .adjacency_product(&b, false, false)
            .expect("product must succeed");
        let ac = a
            .adjacency_product(&c, false, false)
            .expect("product must succeed");
        let right = Digraph::union(&[&ab, &ac]).expect("union must succeed");

        for v in 0..3 {
            assert_eq!(row_set(&left, v), row_set(&right, v));
        }
    }

    #[test]
    fn force_diagonal_prepends_self_row_and_skips_self_arcs() {
        // A(0) = {0, 1}; with force_diagonal, the `0 -> 0` arc in A is
        // skipped but B(0) is still emitted via the forced pre-pass, and
        // the `0 -> 1` arc in A still contributes B(1). Ten vertices so
        // head ids 8 and 9 are in range.
        let mut a_rows: Vec<&[usize]> = vec![&[]; 10];
        a_rows[0] = &[0, 1];
        let a = from_rows(&a_rows);

        let mut b_rows: Vec<&[usize]> = vec![&[]; 10];
        b_rows[0] = &[9];
        b_rows[1] = &[8];
        let b = from_rows(&b_rows);

        let product = a
            .adjacency_product(&b, true, false)
            .expect("product must succeed");
        assert_eq!(row_set(&product, 0), vec![8, 9]);
    }

    #[test]
    fn sizing_matches_actual_used_arcs() {
        let a = from_rows(&[&[1, 1], &[0]]);
        let b = from_rows(&[&[0, 0], &[1]]);
        let product = a
            .adjacency_product(&b, false, false)
            .expect("product must succeed");
        assert_eq!(product.used_arcs(), product.max_arcs());
    }
}
