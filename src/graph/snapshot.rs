//! Immutable graph snapshots and read-only queries.
//!
//! A `Graph` is a cheaply cloneable handle (`Arc`) to frozen storage. Every
//! query here is pure: traversal, analysis, shortest-path, and export all
//! borrow the snapshot without mutating it, so arbitrarily many readers and
//! concurrent mutation scopes can share one snapshot safely.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::storage::{Direction, GraphCore, GraphKind};
use crate::index::{EdgeIndex, NodeIndex};

/// An immutable labeled graph snapshot with payloads `N` on nodes and `E` on
/// edges.
///
/// Snapshots form a lineage: every mutation scope (see
/// [`Graph::with_mutations`](crate::graph::Graph::with_mutations)) freezes a
/// new successor snapshot while the input stays valid. Cloning a `Graph` is
/// O(1) — it shares storage, it does not copy it.
#[derive(Serialize, Deserialize)]
pub struct Graph<N, E> {
    pub(crate) core: Arc<GraphCore<N, E>>,
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            core: Arc::new(GraphCore::new(kind)),
        }
    }

    /// Creates an empty directed graph.
    pub fn empty_directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates an empty undirected graph.
    pub fn empty_undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub(crate) fn from_core(core: GraphCore<N, E>) -> Self {
        Graph {
            core: Arc::new(core),
        }
    }

    /// The topology kind fixed at creation.
    pub fn kind(&self) -> GraphKind {
        self.core.kind
    }

    /// Whether edges respect source→target order.
    pub fn is_directed(&self) -> bool {
        self.core.kind == GraphKind::Directed
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.core.nodes.len()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.core.edges.len()
    }

    /// Whether `ix` names a live node.
    pub fn contains_node(&self, ix: NodeIndex) -> bool {
        self.core.nodes.contains_key(&ix)
    }

    /// Whether `ix` names a live edge.
    pub fn contains_edge(&self, ix: EdgeIndex) -> bool {
        self.core.edges.contains_key(&ix)
    }

    /// The payload of node `ix`, absent for unknown or removed indices.
    pub fn get_node(&self, ix: NodeIndex) -> Option<&N> {
        self.core.nodes.get(&ix)
    }

    /// The edge named `ix`, absent for unknown or removed indices.
    pub fn get_edge(&self, ix: EdgeIndex) -> Option<EdgeRef<'_, E>> {
        self.core.edges.get(&ix).map(|record| EdgeRef {
            index: ix,
            source: record.source,
            target: record.target,
            payload: &record.payload,
        })
    }

    /// Live node indices in increasing index order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.core.nodes.keys().copied()
    }

    /// Live edge indices in increasing index order.
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.core.edges.keys().copied()
    }

    /// Live nodes with payloads, in increasing index order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &N)> {
        self.core.nodes.iter().map(|(&ix, payload)| (ix, payload))
    }

    /// Live edges, in increasing index order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, E>> {
        self.core.edges.iter().map(|(&ix, record)| EdgeRef {
            index: ix,
            source: record.source,
            target: record.target,
            payload: &record.payload,
        })
    }

    /// Outgoing neighbors of `node` in adjacency-insertion order.
    ///
    /// Symmetric for undirected graphs. Self-loops yield the node itself and
    /// parallel edges yield the neighbor once per edge.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.neighbors_directed(node, Direction::Outgoing)
    }

    /// Neighbors of `node` along the chosen direction, in
    /// adjacency-insertion order. Undirected graphs ignore the direction.
    pub fn neighbors_directed(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.core
            .adjacency(node, direction)
            .iter()
            .map(move |&edge| self.core.neighbor_of(edge, node, direction))
    }

    /// Edges incident to `node` along the chosen direction, in
    /// adjacency-insertion order.
    pub fn incident_edges(
        &self,
        node: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = EdgeRef<'_, E>> {
        self.core
            .adjacency(node, direction)
            .iter()
            .map(move |&ix| {
                let record = &self.core.edges[&ix];
                EdgeRef {
                    index: ix,
                    source: record.source,
                    target: record.target,
                    payload: &record.payload,
                }
            })
    }

    /// The lowest-index node whose payload satisfies `predicate`.
    pub fn find_node<P>(&self, mut predicate: P) -> Option<NodeIndex>
    where
        P: FnMut(NodeIndex, &N) -> bool,
    {
        self.nodes()
            .find(|&(ix, payload)| predicate(ix, payload))
            .map(|(ix, _)| ix)
    }

    /// The lowest-index edge satisfying `predicate`.
    pub fn find_edge<P>(&self, mut predicate: P) -> Option<EdgeIndex>
    where
        P: FnMut(EdgeRef<'_, E>) -> bool,
    {
        self.edges().find(|&edge| predicate(edge)).map(|e| e.index)
    }

    pub(crate) fn core(&self) -> &GraphCore<N, E> {
        &self.core
    }
}

impl<N, E> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        Graph {
            core: Arc::clone(&self.core),
        }
    }
}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.core.kind)
            .field("nodes", &self.core.nodes)
            .field("edges", &self.core.edges)
            .finish_non_exhaustive()
    }
}

/// Structural equality: same kind, payloads, adjacency, and lineage
/// counters. Two snapshots that compare equal are interchangeable.
impl<N: PartialEq, E: PartialEq> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core
    }
}

impl<N: Eq, E: Eq> Eq for Graph<N, E> {}

/// A borrowed view of one edge: its index, endpoints, and payload.
///
/// For undirected edges the source/target order is the canonical insertion
/// order and is retained for inspection only; traversal treats both
/// endpoints symmetrically.
#[derive(Debug)]
pub struct EdgeRef<'a, E> {
    pub(crate) index: EdgeIndex,
    pub(crate) source: NodeIndex,
    pub(crate) target: NodeIndex,
    pub(crate) payload: &'a E,
}

impl<'a, E> EdgeRef<'a, E> {
    /// The edge's index.
    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    /// The canonical source endpoint.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// The canonical target endpoint.
    pub fn target(&self) -> NodeIndex {
        self.target
    }

    /// The caller-attached payload.
    pub fn payload(&self) -> &'a E {
        self.payload
    }

    /// The endpoint opposite to `node` (the node itself for self-loops).
    pub fn other_endpoint(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

impl<'a, E> Clone for EdgeRef<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for EdgeRef<'a, E> {}
