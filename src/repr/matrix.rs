/*!
# Adjacency Matrices

Conversion between graphs and symmetric adjacency matrices.

A matrix is a square `&[Vec<NumEdges>]` whose entry `m[i][j]` is the
multiplicity of the edge `{i,j}`. The diagonal entry `m[i][i]` is the number
of **self-loops** at `i`; each loop contributes 2 to the degree of `i`, in
line with the loop convention of [`MultiGraph`].

Validation happens before any graph is built: the matrix must be non-empty,
square and symmetric, otherwise [`Error::EmptyMatrix`],
[`Error::NonSquareMatrix`] or [`Error::AsymmetricMatrix`] is returned.
*/

use super::*;

/// Trait for building a graph from a symmetric adjacency matrix.
///
/// Implemented for every graph supporting [`GraphNew`] and
/// [`GraphEdgeEditing`].
pub trait FromAdjacencyMatrix: Sized {
    /// Builds the graph described by `matrix`.
    ///
    /// Only the upper triangle (`i <= j`) is consumed; since
    /// [`GraphEdgeEditing::add_edge`] inserts both edge-endpoints, this
    /// yields exactly `m[i][j]` parallel edges per unordered pair and
    /// `m[i][i]` self-loops per node.
    ///
    /// # Errors
    /// Returns an error if the matrix is empty, not square, or not symmetric.
    ///
    /// # Example
    /// ```
    /// use eulertour::prelude::*;
    ///
    /// let matrix = vec![
    ///     vec![0, 1, 0, 1],
    ///     vec![1, 0, 1, 0],
    ///     vec![0, 1, 0, 1],
    ///     vec![1, 0, 1, 0],
    /// ];
    /// let graph = AdjArrayMulti::try_from_matrix(&matrix).unwrap();
    ///
    /// assert_eq!(graph.number_of_nodes(), 4);
    /// assert_eq!(graph.number_of_edges(), 4);
    /// ```
    fn try_from_matrix(matrix: &[Vec<NumEdges>]) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> FromAdjacencyMatrix for G {
    fn try_from_matrix(matrix: &[Vec<NumEdges>]) -> Result<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }

        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(Error::NonSquareMatrix {
                    row,
                    found: entries.len(),
                    expected: n,
                });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if matrix[i][j] != matrix[j][i] {
                    return Err(Error::AsymmetricMatrix {
                        u: i as Node,
                        v: j as Node,
                        forward: matrix[i][j],
                        backward: matrix[j][i],
                    });
                }
            }
        }

        let mut graph = Self::new(n as NumNodes);
        for i in 0..n {
            for j in i..n {
                for _ in 0..matrix[i][j] {
                    graph.add_edge(i as Node, j as Node);
                }
            }
        }

        Ok(graph)
    }
}

/// Trait for exporting a graph back into its adjacency matrix.
pub trait ToAdjacencyMatrix {
    /// Returns the symmetric multiplicity matrix of the graph, with
    /// `m[i][i]` counting self-loops once per loop.
    fn to_matrix(&self) -> Vec<Vec<NumEdges>>;
}

impl<G: AdjacencyList> ToAdjacencyMatrix for G {
    fn to_matrix(&self) -> Vec<Vec<NumEdges>> {
        let n = self.len();
        let mut matrix = vec![vec![0; n]; n];

        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                matrix[u as usize][v as usize] += 1;
            }
        }

        // a loop stores two entries but counts as one matrix unit
        for (u, row) in matrix.iter_mut().enumerate() {
            row[u] /= 2;
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn four_cycle() {
        let matrix = vec![
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
        ];
        let graph = AdjArrayMulti::try_from_matrix(&matrix).unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(
            graph.ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn multiplicities_and_loops() {
        // two parallel edges {0,1}, one loop at 2
        let matrix = vec![vec![0, 2, 0], vec![2, 0, 0], vec![0, 0, 1]];
        let graph = AdjArrayMulti::try_from_matrix(&matrix).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.degree_of(2), 2);
        assert_eq!(graph.edge_multiset()[&Edge(0, 1)], 2);
        assert_eq!(graph.edge_multiset()[&Edge(2, 2)], 1);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            AdjArrayMulti::try_from_matrix(&[]).unwrap_err(),
            Error::EmptyMatrix
        );
    }

    #[test]
    fn rejects_non_square() {
        let matrix = vec![vec![0, 1], vec![1, 0, 0]];
        assert_eq!(
            AdjArrayMulti::try_from_matrix(&matrix).unwrap_err(),
            Error::NonSquareMatrix {
                row: 1,
                found: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_asymmetric() {
        let matrix = vec![vec![0, 1, 0], vec![1, 0, 1], vec![1, 1, 0]];
        assert_eq!(
            AdjArrayMulti::try_from_matrix(&matrix).unwrap_err(),
            Error::AsymmetricMatrix {
                u: 0,
                v: 2,
                forward: 0,
                backward: 1
            }
        );
    }

    #[test]
    fn matrix_round_trip() {
        let matrix = vec![
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![0, 1, 0],
        ];
        let graph = SparseAdjArrayMulti::try_from_matrix(&matrix).unwrap();
        assert_eq!(graph.to_matrix(), matrix);
    }
}
