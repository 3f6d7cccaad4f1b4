/*!
`eulertour` computes **Eulerian tours** — closed circuits or open trails that
traverse every edge of a graph exactly once — for graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Neither nodes nor edges have a weight attached to them
- **u**ndirected : `Edge(u, v)` is treated as equivalent to `Edge(v, u)`

Parallel edges and self-loops are supported, so the graphs are multigraphs;
a self-loop counts twice towards the degree of its node.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number
of nodes in the graph. For **edges**, we use a simple tuple-struct
`Edge(Node, Node)`. Graphs store one neighbor-**multiset** per node; see the
[`repr`] module for the available storage backends
([`AdjArrayMulti`](repr::AdjArrayMulti),
[`SparseAdjArrayMulti`](repr::SparseAdjArrayMulti)). The typical entry point
is a symmetric adjacency
matrix whose entries are edge multiplicities
([`FromAdjacencyMatrix`](repr::FromAdjacencyMatrix)).

# Design

Graph capabilities are expressed as traits ([`AdjacencyList`](ops::AdjacencyList),
[`GraphEdgeEditing`](ops::GraphEdgeEditing), ...) and all algorithms are
blanket-implemented on top of them, so every backend gains traversal,
connectivity checking, Eulerian classification and tour construction for
free. Tour construction consumes the graph by value: Hierholzer's algorithm
removes each edge as it is traversed.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations
  and all graph representations,
- [`algo`] includes the algorithm traits implemented on graphs itself, such
  as BFS/DFS (`graph.bfs(start_node)`), edge-connectivity, Eulerian
  classification and the tour construction,
- [`gens`] includes substructure connectors (paths/cycles/cliques) and a
  random generator for guaranteed-Eulerian instances,
- [`io`] includes handlers for reading/writing the adjacency-matrix format.

In most use-cases, `use eulertour::{prelude::*, algo::*};` suffices:

```
use eulertour::{prelude::*, algo::*};

let matrix = vec![
    vec![0, 1, 0, 1],
    vec![1, 0, 1, 0],
    vec![0, 1, 0, 1],
    vec![1, 0, 1, 0],
];

let graph = AdjArrayMulti::try_from_matrix(&matrix).unwrap();
let tour = graph.euler_tour().unwrap();

assert!(tour.is_closed());
assert_eq!(tour.number_of_edges(), 4);
assert_eq!(format!("Euler Tour: {tour}"), "Euler Tour: [0, 1, 2, 3, 0]");
```

A connected graph with exactly two odd-degree nodes yields an open trail
between them instead:

```
use eulertour::{prelude::*, algo::*};

let path = AdjArrayMulti::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
assert_eq!(path.euler_class(), EulerClass::SemiEulerian(0, 3));

let tour = path.euler_tour().unwrap();
assert_eq!(tour.nodes().first(), Some(&0));
assert_eq!(tour.nodes().last(), Some(&3));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `eulertour::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
