use crate::graph::traits::{check_weight, Graph, NodeId, Weight};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// An undirected graph implementation using adjacency lists keyed by node id
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Edges for each node: node -> [(neighbor, weight)]
    adjacency: BTreeMap<N, Vec<(N, W)>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Builds a graph from its node set and undirected edge list
    ///
    /// Every edge is stored in both directions. A repeated edge keeps the last
    /// weight given for it.
    pub fn from_edges<I, E>(nodes: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = AdjacencyGraph {
            adjacency: nodes.into_iter().map(|n| (n, Vec::new())).collect(),
        };

        for (from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }

        Ok(graph)
    }

    fn insert_edge(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if !self.adjacency.contains_key(&from) || !self.adjacency.contains_key(&to) {
            return Err(Error::InvalidEdge(format!("{:?}", from), format!("{:?}", to)));
        }
        let weight = check_weight(weight)?;

        self.upsert(from, to, weight);
        if from != to {
            self.upsert(to, from, weight);
        }
        Ok(())
    }

    fn upsert(&mut self, from: N, to: N, weight: W) {
        if let Some(edges) = self.adjacency.get_mut(&from) {
            match edges.iter_mut().find(|(target, _)| *target == to) {
                Some(edge) => edge.1 = weight,
                None => edges.push((to, weight)),
            }
        }
    }

    /// Returns true if there's an edge between the two nodes
    pub fn has_edge(&self, from: N, to: N) -> bool {
        self.adjacency
            .get(&from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }
}

impl<N, W> Graph for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn weight(&self, from: N, to: N) -> Option<W> {
        self.adjacency
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    fn neighbors(&self, node: N) -> Box<dyn Iterator<Item = N> + '_> {
        if let Some(edges) = self.adjacency.get(&node) {
            Box::new(edges.iter().map(|(target, _)| *target))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains(&self, node: N) -> bool {
        self.adjacency.contains_key(&node)
    }
}
