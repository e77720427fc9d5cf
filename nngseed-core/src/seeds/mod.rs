//! Seed-finding engine: five strategies for choosing initial cluster
//! representatives from a nearest-neighbour graph, behind one dispatch
//! facade.

mod exclusion;
mod inwards_updating;
mod lexical;
mod scaffold;

use crate::clustering::Clustering;
use crate::digraph::Digraph;
use crate::error::Result;

pub use self::exclusion::{find_seeds_exclusion_order, find_seeds_exclusion_updating};
pub use self::inwards_updating::find_seeds_inwards_updating;
pub use self::lexical::{find_seeds_inwards_order, find_seeds_lexical};

/// Selects which of the five seed-finding strategies
/// [`get_seed_clustering`] runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SeedStrategy {
    /// Plain ascending vertex-id order.
    Lexical,
    /// Ascending NNG in-degree order, computed once.
    InwardsOrder,
    /// Ascending NNG in-degree order, kept live as vertices are consumed.
    InwardsUpdating,
    /// Ascending exclusion-graph in-degree order, computed once.
    ExclusionOrder,
    /// Ascending exclusion-graph in-degree order, kept live as vertices
    /// are consumed.
    ExclusionUpdating,
}

/// Runs the seed-finding strategy named by `strategy` over `nng` and
/// returns the resulting clustering (seeds plus whichever NNG neighbours
/// they recruited along the way).
///
/// `seed_init_capacity` pre-reserves room in the returned clustering's seed
/// list (clamped to `nng.vertices()`); it is a sizing hint only, never a
/// hard limit — `Clustering::add_seed` grows past it like any `Vec`.
///
/// Per spec.md §9's open question about the source's dispatch function
/// discarding its discovered clustering on success, this implementation
/// always returns the clustering the chosen strategy found.
///
/// # Errors
/// Returns `Err` only for the `Exclusion*` strategies, which build an
/// exclusion graph first; see [`crate::exclusion::build_exclusion_graph`].
pub fn get_seed_clustering(
    nng: &Digraph,
    strategy: SeedStrategy,
    seed_init_capacity: usize,
) -> Result<Clustering> {
    Ok(match strategy {
        SeedStrategy::Lexical => find_seeds_lexical(nng, seed_init_capacity),
        SeedStrategy::InwardsOrder => find_seeds_inwards_order(nng, seed_init_capacity),
        SeedStrategy::InwardsUpdating => find_seeds_inwards_updating(nng, seed_init_capacity),
        SeedStrategy::ExclusionOrder => find_seeds_exclusion_order(nng, seed_init_capacity)?,
        SeedStrategy::ExclusionUpdating => {
            find_seeds_exclusion_updating(nng, seed_init_capacity)?
        }
    })
}
