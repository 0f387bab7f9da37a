//! # `strata` - Persistent Labeled Graphs with Scoped Batch Mutation
//!
//! A general-purpose graph data-structure-and-algorithms library: a labeled
//! graph container with arbitrary node/edge payloads, directed and
//! undirected topologies, efficient batch mutation, and classical graph
//! algorithms.
//!
//! ## Snapshot Model
//!
//! A [`Graph`] is an immutable snapshot. Cloning one is O(1) — handles share
//! storage — so a snapshot can be read by arbitrarily many readers while
//! successors are built from it. Snapshots form a lineage: node and edge
//! indices are assigned monotonically and never reused, so a stale index can
//! only miss, never alias a newer element.
//!
//! ## Mutation Scopes
//!
//! All edits flow through [`Graph::with_mutations`]. The scope body receives
//! an exclusive [`MutScope`] capability over a private working copy of
//! storage: one O(V+E) copy at entry, in-place edits with no per-edit
//! copying, and a freeze into a new snapshot on exit. The capability cannot
//! escape its scope — the body only ever holds `&mut MutScope`, so the
//! borrow checker enforces the non-escaping discipline at compile time; no
//! runtime invalidation is needed.
//!
//! ## Algorithms
//!
//! - Traversal: [`Dfs`]/[`Bfs`] pull-based, multi-start, visit-once
//!   iterators with explicit worklists (no recursion-depth hazards).
//! - Analysis: [`is_acyclic`], [`topological_order`] (Kahn, lowest-index
//!   ties), [`connected_components`], [`strongly_connected_components`]
//!   (iterative Tarjan), [`bipartite_coloring`].
//! - Shortest paths: [`dijkstra`], [`astar`], [`bellman_ford`],
//!   [`floyd_warshall`], all parameterized by caller cost functions over
//!   edge payloads and generic over the cost type.
//! - Export: [`to_graph_description`] renders deterministic DOT text.
//!
//! Recoverable algorithmic outcomes — cycles, negative cycles, odd cycles —
//! are explicit [`GraphError`] values in return types; unreachability is an
//! absent value, never an error.
//!
//! ## Example
//!
//! ```rust
//! use strata::{dijkstra, Graph};
//!
//! let g: Graph<&str, u32> = Graph::empty_directed();
//! let g = g.with_mutations(|scope| {
//!     let a = scope.add_node("a");
//!     let b = scope.add_node("b");
//!     let c = scope.add_node("c");
//!     scope.add_edge(a, b, 1).unwrap();
//!     scope.add_edge(b, c, 2).unwrap();
//!     scope.add_edge(a, c, 8).unwrap();
//! });
//!
//! let a = g.find_node(|_, &n| n == "a").unwrap();
//! let c = g.find_node(|_, &n| n == "c").unwrap();
//! let best = dijkstra(&g, a, c, |&w| w).unwrap();
//! assert_eq!(best.distance, 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod algo;
pub mod error;
pub mod export;
pub mod graph;
pub mod index;
pub mod traverse;

pub use algo::{
    astar, bellman_ford, bellman_ford_path, bipartite_coloring, connected_components,
    dijkstra, floyd_warshall, is_acyclic, strongly_connected_components, topological_order,
    BellmanFord, FloydWarshall, PathResult,
};
pub use error::GraphError;
pub use export::to_graph_description;
pub use graph::{Direction, EdgeRef, Graph, GraphKind, MutScope};
pub use index::{EdgeIndex, NodeIndex};
pub use traverse::{Bfs, Dfs};

// Index newtypes must stay free of overhead relative to the raw integer.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeIndex>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeIndex>() == mem::size_of::<usize>());
};
