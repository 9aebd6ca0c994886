use crate::graph::{AdjacencyGraph, NodeId};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A single undirected edge in a graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord<N> {
    pub from: N,
    pub to: N,
    pub weight: f64,
}

/// Serialized form of an undirected weighted graph
///
/// ```json
/// { "nodes": [0, 1, 2], "edges": [{ "from": 0, "to": 1, "weight": 7.0 }] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument<N> {
    pub nodes: Vec<N>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeRecord<N>>,
}

impl<N> GraphDocument<N>
where
    N: NodeId,
{
    /// Builds the adjacency graph the document describes
    ///
    /// Endpoints and weights are validated by [`AdjacencyGraph::from_edges`].
    pub fn into_graph(self) -> Result<AdjacencyGraph<N, OrderedFloat<f64>>> {
        let edges = self
            .edges
            .into_iter()
            .map(|e| (e.from, e.to, OrderedFloat(e.weight)));
        AdjacencyGraph::from_edges(self.nodes, edges)
    }
}

/// Parses a JSON graph document
pub fn from_json_str<N>(json: &str) -> Result<AdjacencyGraph<N, OrderedFloat<f64>>>
where
    N: NodeId + DeserializeOwned,
{
    let document: GraphDocument<N> =
        serde_json::from_str(json).map_err(|e| Error::GraphLoad(e.to_string()))?;
    log::debug!(
        "Loaded graph document with {} nodes and {} edges",
        document.nodes.len(),
        document.edges.len()
    );
    document.into_graph()
}

/// Reads a JSON graph document from any reader (file, stdin, ...)
pub fn from_json_reader<N, R>(reader: R) -> Result<AdjacencyGraph<N, OrderedFloat<f64>>>
where
    N: NodeId + DeserializeOwned,
    R: Read,
{
    let document: GraphDocument<N> =
        serde_json::from_reader(reader).map_err(|e| Error::GraphLoad(e.to_string()))?;
    document.into_graph()
}
