use std::collections::HashMap;
use std::fmt::{self, Debug, Display};

use crate::algorithm::path::reconstruct;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Counters collected during a single query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier and settled
    pub settled: usize,
    /// Frontier entries discarded because their node was already settled
    pub stale: usize,
    /// Successful relaxations (distance improvements)
    pub relaxations: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

/// Outcome of a point-to-point query
///
/// `distance` is `None` when the target was never reached. `path` carries
/// [`Error::Unreachable`] in that case instead of failing the whole query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N, W> {
    pub distance: Option<W>,
    pub path: Result<Vec<N>>,
}

impl<N, W> Route<N, W> {
    /// Returns true if a path to the target was found
    pub fn is_reachable(&self) -> bool {
        self.path.is_ok()
    }
}

impl<N: Debug, W: Display> Display for Route<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = match &self.path {
            Ok(path) => path
                .iter()
                .map(|n| format!("{:?}", n))
                .collect::<Vec<_>>()
                .join(" -> "),
            Err(_) => return write!(f, "unreachable"),
        };

        match &self.distance {
            Some(distance) => write!(f, "{} via {}", distance, path),
            None => write!(f, "{}", path),
        }
    }
}

/// Distances and predecessors from one source to every node
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node of the search
    pub source: N,

    /// Distance from the source to each node, `None` if not reached
    pub distances: HashMap<N, Option<W>>,

    /// Predecessor of each node on its best known path
    pub predecessors: HashMap<N, Option<N>>,

    pub stats: SearchStats,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance to `target`, failing if the node is not part of the graph
    pub fn distance_to(&self, target: N) -> Result<Option<W>> {
        self.distances
            .get(&target)
            .copied()
            .ok_or_else(|| Error::InvalidNode(format!("{:?}", target)))
    }

    /// Node sequence from the source to `target`
    pub fn path_to(&self, target: N) -> Result<Vec<N>> {
        if !self.predecessors.contains_key(&target) {
            return Err(Error::InvalidNode(format!("{:?}", target)));
        }
        reconstruct(&self.predecessors, self.source, target)
    }

    /// Distance and path to `target`
    pub fn route_to(&self, target: N) -> Result<Route<N, W>> {
        let distance = self.distance_to(target)?;
        let path = self.path_to(target);
        Ok(Route { distance, path })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths<G: Graph>(
        &self,
        graph: &G,
        source: G::Node,
    ) -> Result<ShortestPathTree<G::Node, G::Weight>>;

    /// Compute the distance and path from `source` to `target`
    ///
    /// Fails with [`Error::InvalidNode`] before any work if either node is unknown.
    fn search<G: Graph>(
        &self,
        graph: &G,
        source: G::Node,
        target: G::Node,
    ) -> Result<Route<G::Node, G::Weight>>;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path<N: NodeId, W: Weight>(
        &self,
        result: &ShortestPathTree<N, W>,
        target: N,
    ) -> Option<Vec<N>> {
        result.path_to(target).ok()
    }
}
