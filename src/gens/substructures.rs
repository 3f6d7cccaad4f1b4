/*!
# Substructure Generators

Utility methods to connect **substructures** inside an already existing
graph:

- **Paths**
- **Cycles**
- **Cliques**

These are useful when enriching a graph with known motifs for testing, e.g.
overlaying cycles to keep all degrees even. Since the underlying graphs are
multigraphs, connecting a structure twice creates parallel edges instead of
failing.

# Example

```rust
use eulertour::{prelude::*, gens::*};

let mut g = AdjArrayMulti::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(g.number_of_edges(), 5);
assert!(g.has_edge(2, 4));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    /// - A single node yields a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all set nodes into a **clique** (complete subgraph).
    ///
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique(&mut self, nodes: &NodeBitSet, with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &NodeBitSet, with_loops: bool) {
        for u in nodes.iter_set_bits() {
            for v in nodes.iter_set_bits() {
                if u < v || (with_loops && u == v) {
                    self.add_edge(u, v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }

        {
            // walking back over an edge creates a parallel edge
            let mut g = AdjArrayMulti::new(3);
            g.connect_path([0, 1, 0]);
            assert_eq!(g.number_of_edges(), 2);
            assert_eq!(g.edge_multiset()[&Edge(0, 1)], 2);
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(g.number_of_edges(), 4);
            assert!(g.has_edge(4, 0));
            assert!(g.odd_degree_vertices().next().is_none());
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_clique(&NodeBitSet::new(6), true);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_clique(&NodeBitSet::new_with_bits_set(6, [1 as Node]), false);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayMulti::new(6);
            g.connect_clique(&NodeBitSet::new_with_bits_set(6, [1 as Node]), true);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            // K5 has 10 edges and all degrees even
            let mut g = AdjArrayMulti::new(5);
            g.connect_clique(&NodeBitSet::new_with_bits_set(5, 0..5 as Node), false);
            assert_eq!(g.number_of_edges(), 10);
            assert!(g.degrees().all(|d| d == 4));
        }
    }
}
