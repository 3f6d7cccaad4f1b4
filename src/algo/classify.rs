use itertools::Itertools;

use super::*;

/// Degree-parity classification of a graph.
///
/// Together with edge-connectivity (see [`Connectivity`]) this decides
/// whether an Eulerian tour exists and of which kind it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EulerClass {
    /// Every node has even degree: a closed tour exists and may start at
    /// any node of nonzero degree.
    Eulerian,

    /// Exactly two nodes have odd degree (in ascending order): an open
    /// trail exists, it must start at one of them and necessarily ends at
    /// the other.
    SemiEulerian(Node, Node),

    /// Four or more nodes have odd degree: no tour exists.
    /// Carries all odd-degree nodes.
    NonEulerian(Vec<Node>),
}

impl EulerClass {
    /// Returns *true* if the parity condition for some tour (closed or open)
    /// is met.
    pub fn admits_tour(&self) -> bool {
        !matches!(self, EulerClass::NonEulerian(_))
    }

    /// Returns the two mandatory trail endpoints in the semi-Eulerian case.
    pub fn trail_endpoints(&self) -> Option<(Node, Node)> {
        match self {
            EulerClass::SemiEulerian(a, b) => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Classifies graphs by degree parity.
pub trait EulerClassify: AdjacencyList + Sized {
    /// Counts the nodes of odd degree: `0` yields [`EulerClass::Eulerian`],
    /// `2` yields [`EulerClass::SemiEulerian`], anything else (at least `4`,
    /// by the handshake lemma) yields [`EulerClass::NonEulerian`].
    ///
    /// Read-only and idempotent; must be called before the graph is handed
    /// to the tour builder, which consumes its edges.
    ///
    /// # Examples
    /// ```
    /// use eulertour::{prelude::*, algo::*};
    ///
    /// let cycle = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert_eq!(cycle.euler_class(), EulerClass::Eulerian);
    ///
    /// let path = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(path.euler_class(), EulerClass::SemiEulerian(0, 3));
    /// ```
    fn euler_class(&self) -> EulerClass {
        let odd = self.odd_degree_vertices().collect_vec();
        match odd.len() {
            0 => EulerClass::Eulerian,
            2 => EulerClass::SemiEulerian(odd[0], odd[1]),
            _ => EulerClass::NonEulerian(odd),
        }
    }
}

impl<G> EulerClassify for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[test]
    fn cycle_is_eulerian() {
        let mut graph = AdjArrayMulti::new(4);
        graph.connect_cycle(0..4);
        assert_eq!(graph.euler_class(), EulerClass::Eulerian);
        assert!(graph.euler_class().admits_tour());
    }

    #[test]
    fn path_is_semi_eulerian() {
        let mut graph = AdjArrayMulti::new(4);
        graph.connect_path(0..4);

        let class = graph.euler_class();
        assert_eq!(class, EulerClass::SemiEulerian(0, 3));
        assert_eq!(class.trail_endpoints(), Some((0, 3)));
    }

    #[test]
    fn star_is_not_eulerian() {
        // center 0 of degree 3, three leaves of degree 1
        let graph = AdjArrayMulti::from_edges(4, [(0, 1), (0, 2), (0, 3)]);

        assert_eq!(graph.euler_class(), EulerClass::NonEulerian(vec![0, 1, 2, 3]));
        assert!(!graph.euler_class().admits_tour());
    }

    #[test]
    fn loops_do_not_affect_parity() {
        let mut graph = AdjArrayMulti::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.euler_class(), EulerClass::Eulerian);

        graph.add_edge(1, 1);
        assert_eq!(graph.euler_class(), EulerClass::Eulerian);
    }

    #[test]
    fn parallel_edges_flip_parity() {
        let mut graph = AdjArrayMulti::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        graph.add_edge(0, 1);
        assert_eq!(graph.euler_class(), EulerClass::SemiEulerian(0, 1));
    }

    #[test]
    fn classification_is_idempotent() {
        let graph = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let first = graph.euler_class();
        assert_eq!(graph.euler_class(), first);
        assert_eq!(graph.euler_class(), first);
    }
}
