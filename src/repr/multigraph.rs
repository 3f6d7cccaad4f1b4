use super::*;

/// An undirected multigraph representation.
///
/// Symmetry invariant: a parallel edge `{u,v}` with `u != v` stores one `v`
/// entry in the neighborhood of `u` and one `u` entry in the neighborhood of
/// `v`. A self-loop at `u` stores two `u` entries in the neighborhood of `u`,
/// so that [`AdjacencyList::degree_of`] counts it twice. Every undirected
/// edge therefore owns exactly two stored entries.
#[derive(Clone)]
pub struct MultiGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayMulti = MultiGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayMulti = MultiGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for MultiGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for MultiGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for MultiGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for MultiGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for MultiGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            num_edges: 0,
            nbs: vec![Nbs::new(n); n as usize],
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for MultiGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(v < self.number_of_nodes());
        if u == v {
            // both loop-endpoints live in the same neighborhood
            self.nbs[u as usize].add_neighbor(u);
            self.nbs[u as usize].add_neighbor(u);
        } else {
            self.nbs[u as usize].add_neighbor(v);
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += 1;
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if u == v {
            if self.nbs[u as usize].count_neighbor(u) < 2 {
                return false;
            }
            assert!(self.nbs[u as usize].try_remove_neighbor(u));
            assert!(self.nbs[u as usize].try_remove_neighbor(u));
        } else if self.nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
        } else {
            return false;
        }

        self.num_edges -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    crate::testing::test_graph_ops!(test_adj_array, AdjArrayMulti);
    crate::testing::test_graph_ops!(test_sparse_adj_array, SparseAdjArrayMulti);

    #[test]
    fn parallel_edges() {
        let mut graph = AdjArrayMulti::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.degree_of(1), 3);
        assert_eq!(graph.edge_multiset()[&Edge(0, 1)], 2);

        assert!(graph.try_remove_edge(1, 0));
        assert!(graph.has_edge(0, 1));
        assert_eq!(graph.number_of_edges(), 2);

        assert!(graph.try_remove_edge(0, 1));
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.try_remove_edge(0, 1));
    }

    #[test]
    fn self_loops_count_twice() {
        let mut graph = SparseAdjArrayMulti::new(2);
        graph.add_edge(0, 0);
        graph.add_edge(0, 1);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 3);
        assert!(graph.has_self_loop(0));
        assert_eq!(graph.edge_multiset()[&Edge(0, 0)], 1);

        assert!(graph.try_remove_edge(0, 0));
        assert_eq!(graph.degree_of(0), 1);
        assert!(!graph.has_self_loop(0));
        assert!(!graph.try_remove_edge(0, 0));
    }

    #[test]
    fn edge_iterators() {
        let graph = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);

        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
        assert_eq!(graph.edges(false).count(), 8);
        assert_eq!(graph.vertices_with_neighbors().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.max_degree(), 2);
    }

    #[test]
    fn odd_degree_vertices() {
        // path: endpoints odd, inner nodes even
        let graph = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![0, 3]);

        // a loop never changes parity
        let mut graph = graph;
        graph.add_edge(2, 2);
        assert_eq!(graph.odd_degree_vertices().collect_vec(), vec![0, 3]);
    }
}
