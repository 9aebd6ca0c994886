use std::collections::HashMap;

use crate::graph::NodeId;
use crate::{Error, Result};

/// Walks predecessor links from `target` back to `source`
///
/// Returns the nodes in travel order, `[source]` when both are the same node.
/// A missing link means `target` was never reached. A chain longer than the
/// table can only come from a cycle and is reported instead of looping.
pub fn reconstruct<N: NodeId>(
    predecessors: &HashMap<N, Option<N>>,
    source: N,
    target: N,
) -> Result<Vec<N>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        let previous = predecessors
            .get(&current)
            .copied()
            .flatten()
            .ok_or_else(|| Error::Unreachable(format!("{:?}", target)))?;

        path.push(previous);
        if path.len() > predecessors.len() {
            return Err(Error::PredecessorCycle(format!("{:?}", target)));
        }
        current = previous;
    }

    path.reverse();
    Ok(path)
}
