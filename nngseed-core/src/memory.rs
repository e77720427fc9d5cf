//! Pre-flight memory estimation for digraph operations.
//!
//! [`Digraph::union`](crate::digraph::Digraph::union) and
//! [`Digraph::adjacency_product`](crate::digraph::Digraph::adjacency_product)
//! already fall back to an exact recount when their fast-path allocation
//! fails, but a caller sizing a batch job ahead of time wants the same
//! upper-bound estimate without running the operation. These functions
//! expose that estimate directly.

use std::mem::size_of;

use crate::digraph::{Digraph, Vertex};

/// Upper-bound byte estimate for the output of
/// [`Digraph::union`](crate::digraph::Digraph::union) over `graphs`, before
/// row-wise dedup shrinks it.
#[must_use]
pub fn estimate_union_bytes(vertices: usize, graphs: &[&Digraph]) -> usize {
    let upper_bound_arcs: usize = graphs.iter().map(|g| g.used_arcs()).sum();
    digraph_bytes(vertices, upper_bound_arcs)
}

/// Upper-bound byte estimate for the output of
/// [`Digraph::adjacency_product`](crate::digraph::Digraph::adjacency_product)
/// of `a` and `b`, before row-wise dedup shrinks it.
#[must_use]
pub fn estimate_product_bytes(
    a: &Digraph,
    b: &Digraph,
    force_diagonal: bool,
    ignore_diagonal: bool,
) -> usize {
    let vertices = a.vertices();
    let mut upper_bound_arcs = 0usize;
    for v in 0..vertices {
        if force_diagonal {
            upper_bound_arcs += b.row(v).len();
        }
        for &u in a.row(v) {
            if u.index() == v && (force_diagonal || ignore_diagonal) {
                continue;
            }
            upper_bound_arcs += b.row(u.index()).len();
        }
    }
    digraph_bytes(vertices, upper_bound_arcs)
}

fn digraph_bytes(vertices: usize, arcs: usize) -> usize {
    let tail_ptr_bytes = (vertices + 1) * size_of::<usize>();
    let head_bytes = arcs * size_of::<Vertex>();
    tail_ptr_bytes + head_bytes
}

/// Renders a byte count as a human-readable string (`B`, `KiB`, `MiB`,
/// `GiB`), rounded to one decimal place above `B`.
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNIT: f64 = 1024.0;
    #[expect(
        clippy::cast_precision_loss,
        reason = "display-only rounding; byte counts this crate handles never approach f64's precision limit"
    )]
    let value = bytes as f64;
    if value < UNIT {
        return format!("{bytes} B");
    }
    let exponent = (value.ln() / UNIT.ln()).floor().min(3.0);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "exponent is clamped to 0..=3 just above"
    )]
    let unit_index = exponent as i32;
    let scaled = value / UNIT.powi(unit_index);
    let suffix = match unit_index {
        1 => "KiB",
        2 => "MiB",
        _ => "GiB",
    };
    format!("{scaled:.1} {suffix}")
}
