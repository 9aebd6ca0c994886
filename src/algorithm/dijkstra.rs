use std::collections::HashMap;

use log::{debug, trace, warn};
use num_traits::Zero;
use rayon::prelude::*;

use crate::algorithm::{Route, SearchStats, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::Frontier;
use crate::graph::traits::check_weight;
use crate::graph::Graph;
use crate::{Error, Result};

/// How the distance of the source node itself is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceDistance {
    /// The source has no recorded distance; only nodes reached over at least
    /// one edge do. A query with `source == target` yields `None`.
    #[default]
    Absent,
    /// The source is at distance zero from itself
    Zero,
}

/// Per-node working record of a query
#[derive(Debug, Clone, Copy)]
struct NodeState<N, W> {
    distance: Option<W>,
    predecessor: Option<N>,
    visited: bool,
}

impl<N, W> Default for NodeState<N, W> {
    fn default() -> Self {
        NodeState {
            distance: None,
            predecessor: None,
            visited: false,
        }
    }
}

/// Dijkstra's algorithm over an explicit frontier with lazy deletion
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    source_distance: SourceDistance,
    /// Stop as soon as the target is settled (point-to-point queries only)
    stop_at_target: bool,
    max_settled: Option<usize>,
    max_frontier: Option<usize>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set how the source's own distance is reported
    pub fn with_source_distance(mut self, policy: SourceDistance) -> Self {
        self.source_distance = policy;
        self
    }

    /// Stop point-to-point searches once the target is settled
    ///
    /// Distances of nodes not yet settled at that point are upper bounds only.
    pub fn with_stop_at_target(mut self, enabled: bool) -> Self {
        self.stop_at_target = enabled;
        self
    }

    /// Fail with [`Error::SearchLimitExceeded`] after settling this many nodes
    pub fn with_max_settled(mut self, limit: Option<usize>) -> Self {
        self.max_settled = limit;
        self
    }

    /// Fail with [`Error::SearchLimitExceeded`] when the frontier grows past this size
    pub fn with_max_frontier(mut self, limit: Option<usize>) -> Self {
        self.max_frontier = limit;
        self
    }

    /// Runs independent point-to-point queries in parallel over one graph
    ///
    /// Results are returned in query order.
    pub fn search_many<G>(
        &self,
        graph: &G,
        queries: &[(G::Node, G::Node)],
    ) -> Vec<Result<Route<G::Node, G::Weight>>>
    where
        G: Graph + Sync,
        G::Node: Send + Sync,
        G::Weight: Send + Sync,
    {
        queries
            .par_iter()
            .map(|&(source, target)| self.search(graph, source, target))
            .collect()
    }

    fn check_frontier(&self, len: usize) -> Result<()> {
        match self.max_frontier {
            Some(limit) if len > limit => Err(Error::SearchLimitExceeded(format!(
                "frontier grew past {} entries",
                limit
            ))),
            _ => Ok(()),
        }
    }

    fn run<G: Graph>(
        &self,
        graph: &G,
        source: G::Node,
        target: Option<G::Node>,
    ) -> Result<ShortestPathTree<G::Node, G::Weight>> {
        if !graph.contains(source) {
            return Err(Error::InvalidNode(format!("{:?}", source)));
        }

        let mut states: HashMap<G::Node, NodeState<G::Node, G::Weight>> = graph
            .nodes()
            .map(|n| (n, NodeState::default()))
            .collect();
        let mut frontier = Frontier::new();
        let mut stats = SearchStats::default();

        match self.source_distance {
            SourceDistance::Zero => {
                if let Some(state) = states.get_mut(&source) {
                    state.distance = Some(<G::Weight as Zero>::zero());
                }
                self.check_frontier(frontier.push(source, <G::Weight as Zero>::zero()))?;
            }
            SourceDistance::Absent => {
                // Seed with the direct edges and settle the source up front so
                // a round trip through a neighbor cannot give it a distance.
                for n in graph.neighbors(source) {
                    if n == source {
                        continue;
                    }
                    let Some(w) = checked_weight(graph, source, n)? else {
                        continue;
                    };
                    if let Some(state) = states.get_mut(&n) {
                        if state.distance.map_or(true, |d| w < d) {
                            state.distance = Some(w);
                            state.predecessor = Some(source);
                            self.check_frontier(frontier.push(n, w))?;
                        }
                    }
                }
                if let Some(state) = states.get_mut(&source) {
                    state.visited = true;
                }
            }
        }

        while let Some((current, _)) = frontier.pop() {
            let base = match states.get_mut(&current) {
                Some(state) if state.visited => {
                    stats.stale += 1;
                    continue;
                }
                Some(state) => {
                    state.visited = true;
                    state.distance
                }
                None => continue,
            };

            stats.settled += 1;
            if let Some(limit) = self.max_settled {
                if stats.settled > limit {
                    return Err(Error::SearchLimitExceeded(format!(
                        "settled more than {} nodes",
                        limit
                    )));
                }
            }

            if self.stop_at_target && target == Some(current) {
                break;
            }

            // A node without a distance cannot improve anything
            let Some(base) = base else {
                continue;
            };

            for n in graph.neighbors(current) {
                let Some(w) = checked_weight(graph, current, n)? else {
                    continue;
                };
                let Some(state) = states.get_mut(&n) else {
                    warn!("Neighbor {:?} of {:?} is not a node of the graph", n, current);
                    continue;
                };
                if state.visited {
                    continue;
                }

                let candidate = base + w;
                if state.distance.map_or(true, |d| candidate < d) {
                    trace!("Relaxed {:?} via {:?} to {:?}", n, current, candidate);
                    state.distance = Some(candidate);
                    state.predecessor = Some(current);
                    stats.relaxations += 1;
                    self.check_frontier(frontier.push(n, candidate))?;
                }
            }
        }

        stats.peak_frontier = frontier.peak_len();
        debug!(
            "Search from {:?}: settled {}, discarded {} stale, {} relaxations, peak frontier {}",
            source,
            stats.settled,
            stats.stale,
            stats.relaxations,
            stats.peak_frontier
        );

        let mut distances = HashMap::with_capacity(states.len());
        let mut predecessors = HashMap::with_capacity(states.len());
        for (node, state) in states {
            distances.insert(node, state.distance);
            predecessors.insert(node, state.predecessor);
        }

        Ok(ShortestPathTree {
            source,
            distances,
            predecessors,
            stats,
        })
    }
}

/// Weight of an edge reported by `neighbors`, re-checked against `weight`
///
/// `weight` is authoritative: a listed neighbor without a weight is skipped.
fn checked_weight<G: Graph>(
    graph: &G,
    from: G::Node,
    to: G::Node,
) -> Result<Option<G::Weight>> {
    match graph.weight(from, to) {
        Some(w) => check_weight(w).map(Some),
        None => {
            warn!("{:?} lists {:?} as a neighbor but has no edge weight for it", from, to);
            Ok(None)
        }
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G: Graph>(
        &self,
        graph: &G,
        source: G::Node,
    ) -> Result<ShortestPathTree<G::Node, G::Weight>> {
        self.run(graph, source, None)
    }

    fn search<G: Graph>(
        &self,
        graph: &G,
        source: G::Node,
        target: G::Node,
    ) -> Result<Route<G::Node, G::Weight>> {
        for node in [source, target] {
            if !graph.contains(node) {
                return Err(Error::InvalidNode(format!("{:?}", node)));
            }
        }
        self.run(graph, source, Some(target))?.route_to(target)
    }
}
