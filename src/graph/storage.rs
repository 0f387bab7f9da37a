//! Backing storage for graph snapshots.
//!
//! `GraphCore` owns everything a snapshot needs: payload maps for nodes and
//! edges, per-node adjacency lists split by direction, and the monotonic
//! index counters for the lineage. Ordered maps (`BTreeMap`) are deliberate:
//! index-order iteration is what makes export, tie-breaking, and find-first
//! queries deterministic without sorting passes.
//!
//! Adjacency invariants maintained here:
//! - every entry in `outgoing`/`incoming` names a live edge incident to the
//!   owning node;
//! - adjacency lists keep insertion order (the canonical neighbor order);
//! - for undirected graphs `incoming` mirrors `outgoing` exactly;
//! - removing a node detaches every incident edge first.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::index::{EdgeIndex, NodeIndex};

/// Whether edges respect source→target order or are traversable both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    /// Edges are one-way, from source to target.
    Directed,
    /// Edges connect both endpoints symmetrically.
    Undirected,
}

/// Adjacency direction selector for queries on directed graphs.
///
/// Undirected graphs ignore the selector: both directions see the same
/// incident-edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edges whose source is the queried node.
    Outgoing,
    /// Edges whose target is the queried node.
    Incoming,
}

/// An edge's endpoints and payload as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EdgeRecord<E> {
    pub(crate) source: NodeIndex,
    pub(crate) target: NodeIndex,
    pub(crate) payload: E,
}

/// Exclusively-owned storage behind a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GraphCore<N, E> {
    pub(crate) kind: GraphKind,
    pub(crate) nodes: BTreeMap<NodeIndex, N>,
    pub(crate) edges: BTreeMap<EdgeIndex, EdgeRecord<E>>,
    pub(crate) outgoing: BTreeMap<NodeIndex, Vec<EdgeIndex>>,
    pub(crate) incoming: BTreeMap<NodeIndex, Vec<EdgeIndex>>,
    pub(crate) next_node: usize,
    pub(crate) next_edge: usize,
}

impl<N, E> GraphCore<N, E> {
    pub(crate) fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
            next_node: 0,
            next_edge: 0,
        }
    }

    pub(crate) fn add_node(&mut self, payload: N) -> NodeIndex {
        let ix = NodeIndex::new(self.next_node);
        self.next_node += 1;
        self.nodes.insert(ix, payload);
        self.outgoing.insert(ix, Vec::new());
        self.incoming.insert(ix, Vec::new());
        ix
    }

    pub(crate) fn add_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        payload: E,
    ) -> Result<EdgeIndex, GraphError> {
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::UnknownNode(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::UnknownNode(target));
        }

        let ix = EdgeIndex::new(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(
            ix,
            EdgeRecord {
                source,
                target,
                payload,
            },
        );

        match self.kind {
            GraphKind::Directed => {
                self.adjacency_mut(source, Direction::Outgoing).push(ix);
                self.adjacency_mut(target, Direction::Incoming).push(ix);
            }
            GraphKind::Undirected => {
                // Both endpoints list the edge once; `incoming` mirrors
                // `outgoing` so that direction-blind code sees one list.
                self.adjacency_mut(source, Direction::Outgoing).push(ix);
                self.adjacency_mut(source, Direction::Incoming).push(ix);
                if source != target {
                    self.adjacency_mut(target, Direction::Outgoing).push(ix);
                    self.adjacency_mut(target, Direction::Incoming).push(ix);
                }
            }
        }

        Ok(ix)
    }

    pub(crate) fn remove_edge(&mut self, ix: EdgeIndex) -> Result<E, GraphError> {
        let record = self
            .edges
            .remove(&ix)
            .ok_or(GraphError::UnknownEdge(ix))?;

        for endpoint in [record.source, record.target] {
            if let Some(list) = self.outgoing.get_mut(&endpoint) {
                list.retain(|&e| e != ix);
            }
            if let Some(list) = self.incoming.get_mut(&endpoint) {
                list.retain(|&e| e != ix);
            }
        }

        Ok(record.payload)
    }

    pub(crate) fn remove_node(&mut self, ix: NodeIndex) -> Result<N, GraphError> {
        let payload = self
            .nodes
            .remove(&ix)
            .ok_or(GraphError::UnknownNode(ix))?;

        // A directed self-loop sits in both lists; the set collapses it.
        let incident: BTreeSet<EdgeIndex> = self
            .outgoing
            .get(&ix)
            .into_iter()
            .flatten()
            .chain(self.incoming.get(&ix).into_iter().flatten())
            .copied()
            .collect();
        for edge in incident {
            self.remove_edge(edge)
                .expect("adjacency entry refers to a live edge");
        }

        self.outgoing.remove(&ix);
        self.incoming.remove(&ix);
        Ok(payload)
    }

    /// Incident-edge list of `node` for the requested direction, in
    /// insertion order. Unknown nodes read as empty.
    pub(crate) fn adjacency(&self, node: NodeIndex, direction: Direction) -> &[EdgeIndex] {
        let map = match (self.kind, direction) {
            (GraphKind::Undirected, _) | (GraphKind::Directed, Direction::Outgoing) => {
                &self.outgoing
            }
            (GraphKind::Directed, Direction::Incoming) => &self.incoming,
        };
        map.get(&node).map_or(&[], Vec::as_slice)
    }

    fn adjacency_mut(&mut self, node: NodeIndex, direction: Direction) -> &mut Vec<EdgeIndex> {
        let map = match direction {
            Direction::Outgoing => &mut self.outgoing,
            Direction::Incoming => &mut self.incoming,
        };
        map.get_mut(&node)
            .expect("adjacency list exists for every live node")
    }

    /// The node reached from `node` by traversing `edge` in `direction`.
    ///
    /// For undirected graphs the direction is ignored and the opposite
    /// endpoint is returned (the node itself for self-loops).
    pub(crate) fn neighbor_of(
        &self,
        edge: EdgeIndex,
        node: NodeIndex,
        direction: Direction,
    ) -> NodeIndex {
        let record = &self.edges[&edge];
        match self.kind {
            GraphKind::Undirected => {
                if record.source == node {
                    record.target
                } else {
                    record.source
                }
            }
            GraphKind::Directed => match direction {
                Direction::Outgoing => record.target,
                Direction::Incoming => record.source,
            },
        }
    }
}
