//! Fixed graphs used by the binary, the benches and the tests.

use crate::graph::WeightTable;
use ordered_float::OrderedFloat;

/// Undirected edges of the six-node reference map
pub const REFERENCE_EDGES: [(usize, usize, f64); 9] = [
    (0, 1, 7.0),
    (0, 2, 9.0),
    (0, 5, 14.0),
    (1, 2, 10.0),
    (1, 3, 15.0),
    (2, 3, 11.0),
    (2, 5, 2.0),
    (3, 4, 6.0),
    (4, 5, 9.0),
];

/// The six-node reference map over nodes `0..=5`
///
/// The shortest route from 0 to 4 is `0 -> 2 -> 5 -> 4` with length 20.
pub fn reference_map() -> WeightTable<OrderedFloat<f64>> {
    let mut table = WeightTable::with_nodes(6);
    for (u, v, w) in REFERENCE_EDGES {
        table.connect(u, v, OrderedFloat(w));
    }
    table
}
