//! Synthetic regular nearest-neighbour graph generation for benchmarks.

use rand::rngs::SmallRng;
use rand::seq::index::sample;
use rand::SeedableRng;

use nngseed_core::{Digraph, Vertex};

use crate::error::BenchSetupError;

/// Parameters for a synthetic regular nearest-neighbour graph: `vertices`
/// vertices, each with exactly `arcs_per_vertex` distinct out-neighbours
/// (never itself), drawn uniformly at random using `seed`.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticNngConfig {
    /// Number of vertices in the generated graph.
    pub vertices: usize,
    /// Out-degree of every vertex.
    pub arcs_per_vertex: usize,
    /// Seed for the deterministic random neighbour selection.
    pub seed: u64,
}

/// Builds a synthetic regular nearest-neighbour graph per `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] if `arcs_per_vertex` would force
/// a vertex to neighbour itself (i.e. `arcs_per_vertex >= vertices`), and
/// propagates any [`nngseed_core::GraphError`] from digraph construction.
pub fn generate_regular_nng(config: &SyntheticNngConfig) -> Result<Digraph, BenchSetupError> {
    if config.vertices > 0 && config.arcs_per_vertex >= config.vertices {
        return Err(BenchSetupError::ZeroValue {
            context: "arcs_per_vertex must be smaller than vertices",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut heads = Vec::with_capacity(config.vertices * config.arcs_per_vertex);
    for v in 0..config.vertices {
        let mut candidates: Vec<usize> =
            sample(&mut rng, config.vertices - 1, config.arcs_per_vertex).into_iter().collect();
        candidates.sort_unstable();
        for candidate in candidates {
            // the sampled range excludes `v` itself by shifting indices at
            // or above `v` up by one.
            let neighbour = if candidate >= v { candidate + 1 } else { candidate };
            heads.push(Vertex::new(neighbour));
        }
    }

    Digraph::balanced(config.vertices, config.arcs_per_vertex, heads).map_err(BenchSetupError::from)
}
