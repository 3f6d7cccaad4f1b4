/*!
# Graph Representations

Storage backends for undirected multigraphs. A graph is a `Vec` of per-node
[`Neighborhood`] multisets; the backends differ only in how a single
neighborhood is stored:

- [`AdjArrayMulti`]: each neighborhood is a plain `Vec<Node>`,
- [`SparseAdjArrayMulti`]: each neighborhood is a `SmallVec`, avoiding
  allocations for the low-degree nodes that dominate sparse graphs.

The [`matrix`] submodule converts between graphs and the symmetric
adjacency matrices that form the input boundary of this crate.
*/

use crate::{ops::*, *};

mod matrix;
mod multigraph;
mod neighborhood;

pub use matrix::*;
pub use multigraph::*;
pub use neighborhood::*;
