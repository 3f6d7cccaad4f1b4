use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A Neighborhood is a **multiset**: the same node may appear several times
/// (parallel edges), and a node may neighbor itself (self-loops, two entries
/// per loop). Removal drops a single occurrence and keeps the order of the
/// remaining entries, so algorithms that always take the first entry are
/// deterministic for a given insertion order.
pub trait Neighborhood: Clone {
    /// Creates an empty Neighborhood for a graph of `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of entries in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all entries in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` has at least one entry in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Returns the number of entries of `v` in the Neighborhood
    fn count_neighbor(&self, v: Node) -> NumNodes {
        self.neighbors().filter(|&u| u == v).count() as NumNodes
    }

    /// Adds an entry to the Neighborhood. Duplicates are allowed.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove one occurrence of `u` from the Neighborhood.
    /// Returns *true* if an occurrence was present.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all entries in the Neighborhood
    fn clear(&mut self);
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some(pos) = self.0.iter().position(|&x| x == u) {
            // keep order: the first remaining entry is the tie-break
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some(pos) = self.0.iter().position(|&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn multiset_semantics() {
        let mut nbs = ArrNeighborhood::new(5);
        nbs.add_neighbor(3);
        nbs.add_neighbor(1);
        nbs.add_neighbor(3);

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.count_neighbor(3), 2);
        assert!(nbs.has_neighbor(1));

        assert!(nbs.try_remove_neighbor(3));
        assert_eq!(nbs.count_neighbor(3), 1);
        assert!(!nbs.try_remove_neighbor(4));
    }

    #[test]
    fn removal_keeps_order() {
        let mut nbs = SparseNeighborhood::<8>::new(5);
        for v in [2, 0, 4, 0, 1] {
            nbs.add_neighbor(v);
        }

        assert!(nbs.try_remove_neighbor(0));
        assert_eq!(nbs.neighbors().collect_vec(), vec![2, 4, 0, 1]);
    }
}
