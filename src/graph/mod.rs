pub mod traits;
pub mod adjacency;
pub mod table;
pub mod fixtures;
pub mod generators;
pub mod loader;

pub use traits::{Graph, NodeId, Weight};
pub use adjacency::AdjacencyGraph;
pub use table::WeightTable;
