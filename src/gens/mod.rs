/*!
# Graph Generators

This module provides deterministic substructure connectors (paths, cycles,
cliques) and a random generator for guaranteed-Eulerian instances.

Random generators follow a builder-style pattern: create the generator,
configure it via the setter traits below, then produce edges with
[`GraphGenerator::generate`] or [`GraphGenerator::stream`]. The
[`RandomEulerian`] trait wraps this into a one-call constructor on every
graph type that supports [`GraphFromScratch`].
*/

use rand::Rng;

use crate::prelude::*;

mod cycles;
mod substructures;

pub use cycles::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the number of closed walks.
pub trait NumWalksGen {
    /// Sets the number of closed walks the generator overlays.
    fn walks(self, count: NumEdges) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates an iterator (stream) over generated edges. Depending on the
    /// underlying model, this might just be an iterator over an already
    /// generated list of edges if a direct iterator is not feasible.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building random graph instances that are guaranteed to admit a
/// closed Eulerian tour.
pub trait RandomEulerian: Sized {
    /// Creates a random multigraph as a union of `walks` closed walks, each
    /// anchored at an already visited node. Every node degree is even and
    /// the edge-induced subgraph is connected, so a closed tour always
    /// exists (nodes untouched by any walk stay isolated).
    fn cycle_union<R>(rng: &mut R, n: NumNodes, walks: NumEdges) -> Self
    where
        R: Rng;
}

impl<G> RandomEulerian for G
where
    G: GraphFromScratch,
{
    fn cycle_union<R>(rng: &mut R, n: NumNodes, walks: NumEdges) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            CycleUnion::new().nodes(n).walks(walks).generate(rng),
        )
    }
}
