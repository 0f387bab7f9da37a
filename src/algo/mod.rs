//! Graph algorithms: analysis and weighted shortest paths.
//!
//! Every algorithm is a pure function from a snapshot (plus parameters) to a
//! result — no hidden state, no I/O. Recoverable outcomes (cycles, negative
//! cycles, odd cycles) are encoded in return types; unreachability is an
//! absent value.

mod analysis;
mod shortest_path;

pub use analysis::{
    bipartite_coloring, connected_components, is_acyclic, strongly_connected_components,
    topological_order,
};
pub use shortest_path::{
    astar, bellman_ford, bellman_ford_path, dijkstra, floyd_warshall, BellmanFord, FloydWarshall,
    PathResult,
};
