use super::*;

/// Connectivity check on the **edge-induced** subgraph.
///
/// A tour only has to traverse edges, so nodes of degree 0 are irrelevant:
/// the graph counts as connected iff every node with at least one incident
/// edge is reachable from every other such node. A graph without edges is
/// vacuously connected.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns *true* iff all nodes of nonzero degree lie in one connected
    /// component. Read-only; the visited state is a local bitset.
    ///
    /// # Examples
    /// ```
    /// use eulertour::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2)]);
    /// assert!(g.is_edge_connected()); // node 3 is isolated, which is fine
    ///
    /// let g = AdjArrayMulti::from_edges(4, [(0, 1), (2, 3)]);
    /// assert!(!g.is_edge_connected());
    /// ```
    fn is_edge_connected(&self) -> bool {
        match self.vertices_with_neighbors().next() {
            None => true,
            Some(start) => {
                self.bfs(start).count() as NumNodes == self.number_of_nodes_with_neighbors()
            }
        }
    }

    /// Returns the nodes of nonzero degree that are **not** reachable from
    /// the first node with neighbors. Empty iff the graph is edge-connected.
    fn disconnected_nodes(&self) -> Vec<Node> {
        let Some(start) = self.vertices_with_neighbors().next() else {
            return Vec::new();
        };

        let reached = NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.bfs(start));
        self.vertices_with_neighbors()
            .filter(|&u| !reached.get_bit(u))
            .collect()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_disjoint_triangles() {
        let graph = AdjArrayMulti::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);

        assert!(!graph.is_edge_connected());
        assert_eq!(graph.disconnected_nodes(), vec![3, 4, 5]);
    }

    #[test]
    fn isolated_nodes_do_not_disconnect() {
        // triangle on {1, 3, 5}; nodes 0, 2, 4 are isolated
        let graph = AdjArrayMulti::from_edges(6, [(1, 3), (3, 5), (5, 1)]);

        assert!(graph.is_edge_connected());
        assert!(graph.disconnected_nodes().is_empty());
    }

    #[test]
    fn edgeless_graph_is_vacuously_connected() {
        let graph = AdjArrayMulti::new(4);
        assert!(graph.is_edge_connected());
        assert!(graph.disconnected_nodes().is_empty());
    }

    #[test]
    fn path_is_connected() {
        let graph = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert!(graph.is_edge_connected());
    }
}
