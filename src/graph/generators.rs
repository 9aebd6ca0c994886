use crate::graph::AdjacencyGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a connected undirected graph with `n` nodes
///
/// A random spanning tree is laid down first (node `i` attaches to a random
/// earlier node), then up to `extra_edges` additional distinct edges are
/// added. Weights are drawn uniformly from `1.0..100.0`.
pub fn generate_random_connected<R: Rng>(
    n: usize,
    extra_edges: usize,
    rng: &mut R,
) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    let mut seen = HashSet::new();
    let mut edges = Vec::with_capacity(n + extra_edges);

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        seen.insert((parent, i));
        edges.push((parent, i, OrderedFloat(rng.gen_range(1.0..100.0))));
    }

    // Bounded attempts so dense requests on tiny graphs terminate
    let max_edges = n * n.saturating_sub(1) / 2;
    let target_edges = n.saturating_sub(1) + extra_edges;
    let mut attempts = 0;
    let max_attempts = 10 * (extra_edges + 1);
    while seen.len() < max_edges && edges.len() < target_edges && attempts < max_attempts {
        attempts += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let key = (u.min(v), u.max(v));
        if seen.insert(key) {
            edges.push((key.0, key.1, OrderedFloat(rng.gen_range(1.0..100.0))));
        }
    }

    AdjacencyGraph::from_edges(0..n, edges)
}

/// Generates a `width * height` grid with 4-connectivity and unit weights
pub fn generate_grid(
    width: usize,
    height: usize,
) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push((get_index(x, y), get_index(x + 1, y), OrderedFloat(1.0)));
            }
            if y + 1 < height {
                edges.push((get_index(x, y), get_index(x, y + 1), OrderedFloat(1.0)));
            }
        }
    }

    AdjacencyGraph::from_edges(0..width * height, edges)
}

/// Generates `components` disjoint random connected graphs of `size` nodes each
///
/// Nodes `k * size .. (k + 1) * size` form component `k`.
pub fn generate_disconnected<R: Rng>(
    components: usize,
    size: usize,
    rng: &mut R,
) -> Result<AdjacencyGraph<usize, OrderedFloat<f64>>> {
    let mut edges = Vec::new();
    for k in 0..components {
        let offset = k * size;
        for i in 1..size {
            let parent = rng.gen_range(0..i);
            edges.push((offset + parent, offset + i, OrderedFloat(rng.gen_range(1.0..100.0))));
        }
    }

    AdjacencyGraph::from_edges(0..components * size, edges)
}
