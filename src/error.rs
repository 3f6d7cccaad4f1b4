/*!
# Errors

All fallible operations of this crate share the [`Error`] enum below. Every
check is performed eagerly before tour construction starts; no variant is
recoverable and no partial tour is ever produced.
*/

use thiserror::Error;

use crate::{Node, NumEdges};

/// Errors reported by matrix conversion and tour construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The adjacency matrix has no rows
    #[error("adjacency matrix is empty")]
    EmptyMatrix,

    /// A row of the adjacency matrix has the wrong length
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        /// Index of the offending row
        row: usize,
        /// Number of entries in that row
        found: usize,
        /// Number of rows of the matrix
        expected: usize,
    },

    /// The adjacency matrix differs from its transpose
    #[error("adjacency matrix is not symmetric: entry ({u},{v}) is {forward} but ({v},{u}) is {backward}")]
    AsymmetricMatrix {
        /// Row of the offending entry
        u: Node,
        /// Column of the offending entry
        v: Node,
        /// Value of `matrix[u][v]`
        forward: NumEdges,
        /// Value of `matrix[v][u]`
        backward: NumEdges,
    },

    /// The edge-induced subgraph is not connected, so no tour can exist.
    /// Carries the nonzero-degree nodes that are unreachable from the rest.
    #[error("graph is disconnected: nodes {nodes:?} are unreachable")]
    Disconnected {
        /// Unreachable nodes of nonzero degree
        nodes: Vec<Node>,
    },

    /// More than two nodes have odd degree, so no tour can exist.
    /// Carries all odd-degree nodes for diagnosis.
    #[error("graph admits no euler tour: nodes {nodes:?} have odd degree")]
    NotEulerian {
        /// All nodes of odd degree
        nodes: Vec<Node>,
    },

    /// Tour construction terminated while edges were still present. This
    /// only happens when the connectivity precondition was violated and is
    /// a programming-defect signal, never silently swallowed.
    #[error("tour construction terminated with {remaining} edges left untraversed")]
    UnconsumedEdges {
        /// Number of edges still in the graph
        remaining: NumEdges,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = Error::NotEulerian { nodes: vec![0, 1, 2, 3] };
        assert_eq!(
            err.to_string(),
            "graph admits no euler tour: nodes [0, 1, 2, 3] have odd degree"
        );

        let err = Error::AsymmetricMatrix { u: 0, v: 2, forward: 1, backward: 0 };
        assert!(err.to_string().contains("(0,2)"));
        assert!(err.to_string().contains("(2,0)"));
    }
}
