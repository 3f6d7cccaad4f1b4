use itertools::Itertools;

use super::*;

/// Generator overlaying random **closed walks** into one multigraph.
///
/// Each walk contributes 2 to the degree of every node occurrence (a
/// length-1 walk is a self-loop, a length-2 walk a pair of parallel edges),
/// so all degrees stay even. Every walk after the first is anchored at a
/// node already on some earlier walk, which keeps the edge-induced subgraph
/// connected. The generated edge set therefore always admits a closed
/// Eulerian tour.
///
/// # Example
/// ```
/// use eulertour::{prelude::*, gens::*};
/// use rand::SeedableRng;
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(123);
/// let edges = CycleUnion::new().nodes(10).walks(3).generate(rng);
/// let graph = AdjArrayMulti::from_edges(10, edges);
///
/// assert!(graph.odd_degree_vertices().next().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CycleUnion {
    nodes: NumNodes,
    walks: NumEdges,
}

impl CycleUnion {
    /// Creates an unconfigured generator. Set at least [`NumNodesGen::nodes`]
    /// before generating.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for CycleUnion {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.nodes = n;
        self
    }
}

impl NumWalksGen for CycleUnion {
    fn walks(mut self, count: NumEdges) -> Self {
        self.walks = count;
        self
    }
}

impl GraphGenerator for CycleUnion {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        assert!(self.nodes > 0);

        let mut edges = Vec::new();
        let mut touched: Vec<Node> = Vec::new();

        for _ in 0..self.walks {
            let anchor = if touched.is_empty() {
                rng.random_range(0..self.nodes)
            } else {
                touched[rng.random_range(0..touched.len())]
            };

            // number of edges of this closed walk
            let len = rng.random_range(1..=self.nodes);

            let mut walk = vec![anchor];
            walk.extend((1..len).map(|_| rng.random_range(0..self.nodes)));

            for (u, v) in walk.iter().copied().tuple_windows() {
                edges.push(Edge(u, v));
            }
            edges.push(Edge(*walk.last().unwrap(), anchor));

            touched.append(&mut walk);
        }

        edges.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn instances_are_even_and_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for n in [1 as NumNodes, 2, 3, 10, 42] {
            for walks in [1, 2, 10] {
                let graph = AdjArrayMulti::cycle_union(rng, n, walks);

                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.number_of_edges() >= walks);
                assert!(graph.odd_degree_vertices().next().is_none());
                assert!(graph.is_edge_connected());
                assert_eq!(graph.euler_class(), EulerClass::Eulerian);
            }
        }
    }

    #[test]
    fn walk_count_zero_yields_edgeless_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        let graph = AdjArrayMulti::cycle_union(rng, 5, 0);
        assert!(graph.is_singleton());
    }
}
