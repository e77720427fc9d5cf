//! Directed-graph substrate in compressed sparse row (CSR) layout.
//!
//! This module is the arithmetic the seed-finding engine is built on:
//! construction, transpose, row-deduplicated union of several graphs, and
//! adjacency product with optional diagonal handling. All operations are
//! pure and value-returning; failures surface as `Err(GraphError)` rather
//! than a distinguished null sentinel (see [`crate::error`]).

mod core;
mod product;
mod transpose;
mod union;
mod vertex;

pub use self::core::Digraph;
pub use self::vertex::Vertex;

/// Builds a digraph from a literal list of out-neighbour rows.
///
/// Test-only helper shared across this crate (not just this module)
/// because several higher-level components (`sort`, `exclusion`, `seeds`)
/// need small hand-built digraphs for their own unit tests.
#[cfg(test)]
pub(crate) fn from_rows_for_test(rows: &[&[usize]]) -> Digraph {
    let vertices = rows.len();
    let total: usize = rows.iter().map(|r| r.len()).sum();
    let mut dg = Digraph::init(vertices, total).expect("init must succeed");
    dg.tail_ptr[0] = 0;
    let mut offset = 0;
    for (v, row) in rows.iter().enumerate() {
        for &h in *row {
            dg.head[offset] = Vertex::new(h);
            offset += 1;
        }
        dg.tail_ptr[v + 1] = offset;
    }
    dg
}
