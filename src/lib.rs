//! Dijkstra Path - point-to-point shortest paths on weighted undirected graphs
//!
//! The engine runs Dijkstra's relaxation loop over any provider implementing
//! [`Graph`] and returns both the total distance and the node sequence of an
//! optimal path.
//!
//! ```
//! use dijkstra_path::{graph::fixtures::reference_map, shortest_path};
//!
//! let route = shortest_path(&reference_map(), 0, 4).unwrap();
//! assert_eq!(route.path.unwrap(), vec![0, 2, 5, 4]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, SourceDistance},
    path::reconstruct,
    Route, SearchStats, ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, Graph, WeightTable};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    #[error("Node {0} is unreachable from the source")]
    Unreachable(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a finite number: {0}")]
    InvalidWeight(f64),

    #[error("Predecessor chain of {0} does not lead back to the source")]
    PredecessorCycle(String),

    #[error("Search limit exceeded: {0}")]
    SearchLimitExceeded(String),

    #[error("Failed to load graph: {0}")]
    GraphLoad(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Runs a default-configured [`Dijkstra`] search from `source` to `target`.
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: G::Node,
    target: G::Node,
) -> Result<Route<G::Node, G::Weight>> {
    Dijkstra::new().search(graph, source, target)
}
