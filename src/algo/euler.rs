/*!
# Eulerian Tours

Construction of Eulerian circuits and trails via **Hierholzer's algorithm**.

The construction is iterative and destructive: the graph is moved into the
builder and its edges are removed one at a time, so that "already traversed"
never needs separate bookkeeping. The work stack replaces the classic
recursive formulation, which keeps deep tours off the call stack and makes
the paired edge-removal (both endpoints at once) explicit.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// An Eulerian tour: a sequence of nodes in which consecutive entries are
/// joined by an edge and every edge of the originating graph is traversed
/// exactly once.
///
/// A closed tour starts and ends at the same node; an open trail connects
/// the two odd-degree nodes of a semi-Eulerian graph. A graph without edges
/// yields the trivial tour of a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<Node>,
}

impl Tour {
    /// The visited nodes in traversal order. Never empty.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The number of edges traversed, i.e. `nodes().len() - 1`.
    pub fn number_of_edges(&self) -> NumEdges {
        (self.nodes.len() - 1) as NumEdges
    }

    /// Returns *true* if the tour returns to its starting node.
    /// The trivial single-node tour is closed.
    pub fn is_closed(&self) -> bool {
        self.nodes.first() == self.nodes.last()
    }

    /// Consumes the tour and returns the underlying node sequence
    pub fn into_inner(self) -> Vec<Node> {
        self.nodes
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.nodes.iter().join(", "))
    }
}

/// Provides Eulerian tour construction directly on graphs.
///
/// Both methods take the graph **by value**: edges are removed as they are
/// traversed, so the graph cannot be observed afterwards. Clone beforehand
/// if it is still needed.
pub trait EulerTour: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Sized {
    /// Runs the full pipeline: verifies edge-connectivity, classifies the
    /// degree parities, picks a valid start node and builds the tour.
    ///
    /// The start node is the first node of nonzero degree (node `0` for an
    /// edgeless graph); for a semi-Eulerian graph it is the smaller of the
    /// two odd-degree nodes, so the trail ends at the larger one.
    ///
    /// # Errors
    /// - [`Error::Disconnected`] if nodes of nonzero degree are unreachable
    ///   from each other, carrying the unreachable nodes,
    /// - [`Error::NotEulerian`] if more than two nodes have odd degree,
    ///   carrying all odd-degree nodes.
    ///
    /// # Examples
    /// ```
    /// use eulertour::{prelude::*, algo::*};
    ///
    /// let graph = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// let tour = graph.euler_tour().unwrap();
    ///
    /// assert!(tour.is_closed());
    /// assert_eq!(tour.number_of_edges(), 4);
    /// ```
    fn euler_tour(self) -> Result<Tour> {
        let disconnected = self.disconnected_nodes();
        if !disconnected.is_empty() {
            return Err(Error::Disconnected {
                nodes: disconnected,
            });
        }

        let class = self.euler_class();
        debug!(?class, "classified graph");

        let start = match class {
            EulerClass::Eulerian => self.vertices_with_neighbors().next().unwrap_or(0),
            EulerClass::SemiEulerian(a, _) => a,
            EulerClass::NonEulerian(nodes) => return Err(Error::NotEulerian { nodes }),
        };

        self.euler_tour_from(start)
    }

    /// Builds the tour from a caller-chosen start node, skipping the
    /// precondition checks of [`EulerTour::euler_tour`].
    ///
    /// The caller must have verified that the graph is edge-connected and
    /// Eulerian or semi-Eulerian, that `deg(start) > 0` unless the graph is
    /// edgeless, and that `start` is one of the two odd-degree nodes in the
    /// semi-Eulerian case.
    ///
    /// # Errors
    /// Returns [`Error::UnconsumedEdges`] if edges remain after the stack
    /// runs empty. This only happens when the connectivity precondition was
    /// violated; a partial tour is never returned.
    ///
    /// ** Panics if `start >= n` **
    fn euler_tour_from(self, start: Node) -> Result<Tour> {
        HierholzerSearch::new(self, start).run()
    }
}

impl<G> EulerTour for G where G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing + Sized {}

/// State of one Hierholzer construction: the (shrinking) graph, the work
/// stack of the current partial walk, and the finished tour in reverse.
struct HierholzerSearch<G>
where
    G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing,
{
    graph: G,
    stack: Vec<Node>,
    tour: Vec<Node>,
}

impl<G> HierholzerSearch<G>
where
    G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing,
{
    fn new(graph: G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let tour = Vec::with_capacity(graph.number_of_edges() as usize + 1);
        Self {
            graph,
            stack: vec![start],
            tour,
        }
    }

    fn run(mut self) -> Result<Tour> {
        while let Some(&v) = self.stack.last() {
            // first remaining entry of the multiset; deterministic
            let next = self.graph.neighbors_of(v).next();

            if let Some(w) = next {
                self.graph.remove_edge(v, w);
                self.stack.push(w);
            } else {
                self.tour.push(self.stack.pop().unwrap());
            }
        }

        let remaining = self.graph.number_of_edges();
        if remaining > 0 {
            return Err(Error::UnconsumedEdges { remaining });
        }

        // nodes are emitted on backtrack, so the walk is recorded backwards
        self.tour.reverse();
        debug!(nodes = self.tour.len(), "euler tour constructed");

        Ok(Tour { nodes: self.tour })
    }
}
