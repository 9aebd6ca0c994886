use num_traits::{Float, ToPrimitive, Zero};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Opaque node key accepted by the search engine
pub trait NodeId: Copy + Eq + Hash + Ord + Debug {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + Debug {}

/// Non-negative edge weight with a total order (e.g. `OrderedFloat<f64>`)
pub trait Weight: Float + Zero + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Zero + Debug + Copy + Ord {}

/// Accepts `w` only if it is a finite, non-negative number
pub(crate) fn check_weight<W: Weight>(w: W) -> Result<W> {
    let value = ToPrimitive::to_f64(&w).unwrap_or(f64::NAN);
    if !w.is_finite() {
        Err(Error::InvalidWeight(value))
    } else if w < W::zero() {
        Err(Error::NegativeWeight(value))
    } else {
        Ok(w)
    }
}

/// Trait representing a weighted undirected graph consumed by the search
///
/// Absence of an edge is `None`, which is distinct from a zero-weight edge.
/// Implementations must keep `weight` symmetric and keep `neighbors(u)` in
/// agreement with the nodes `v` for which `weight(u, v)` is present.
pub trait Graph: Debug {
    type Node: NodeId;
    type Weight: Weight;

    /// Returns an iterator over every node of the graph, in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Gets the weight of the edge between two nodes if it exists
    fn weight(&self, from: Self::Node, to: Self::Node) -> Option<Self::Weight>;

    /// Returns an iterator over the nodes adjacent to `node`
    fn neighbors(&self, node: Self::Node) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns true if the node exists in the graph
    fn contains(&self, node: Self::Node) -> bool {
        self.nodes().any(|n| n == node)
    }

    /// Returns the number of undirected edges
    fn edge_count(&self) -> usize {
        let mut endpoints = 0;
        let mut self_loops = 0;
        for u in self.nodes() {
            for v in self.neighbors(u) {
                if u == v {
                    self_loops += 1;
                } else {
                    endpoints += 1;
                }
            }
        }
        endpoints / 2 + self_loops
    }

    /// Checks that weights are symmetric and that neighbor lists agree with them
    ///
    /// Quadratic in the node count times the degree; meant for tests and loaders.
    fn is_symmetric(&self) -> bool {
        self.nodes().all(|u| {
            self.nodes().all(|v| {
                let forward = self.weight(u, v);
                let listed = self.neighbors(u).any(|n| n == v);
                forward == self.weight(v, u) && listed == forward.is_some()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn check_weight_accepts_only_finite_non_negative_values() {
        assert_eq!(check_weight(OrderedFloat(0.0)), Ok(OrderedFloat(0.0)));
        assert_eq!(check_weight(OrderedFloat(3.5)), Ok(OrderedFloat(3.5)));
        assert_eq!(check_weight(OrderedFloat(-2.0)), Err(Error::NegativeWeight(-2.0)));
        assert_eq!(
            check_weight(OrderedFloat(f64::NEG_INFINITY)),
            Err(Error::InvalidWeight(f64::NEG_INFINITY))
        );
        assert!(matches!(
            check_weight(OrderedFloat(f64::NAN)),
            Err(Error::InvalidWeight(w)) if w.is_nan()
        ));
    }
}
