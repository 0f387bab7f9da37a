//! Whole-graph structural transforms.
//!
//! Each transform is a single O(V+E) pass producing a successor snapshot.
//! Maps preserve indices and topology exactly; filtering cascades to
//! incident edges through the normal removal path so adjacency invariants
//! hold by construction.

use std::mem;

use crate::graph::snapshot::Graph;
use crate::graph::storage::{EdgeRecord, GraphCore, GraphKind};
use crate::index::{EdgeIndex, NodeIndex};

impl<N, E> Graph<N, E> {
    /// Replaces every node payload with `f(index, payload)`, preserving
    /// indices and topology.
    pub fn map_nodes<N2, F>(&self, mut f: F) -> Graph<N2, E>
    where
        E: Clone,
        F: FnMut(NodeIndex, &N) -> N2,
    {
        let core = self.core();
        Graph::from_core(GraphCore {
            kind: core.kind,
            nodes: core
                .nodes
                .iter()
                .map(|(&ix, payload)| (ix, f(ix, payload)))
                .collect(),
            edges: core.edges.clone(),
            outgoing: core.outgoing.clone(),
            incoming: core.incoming.clone(),
            next_node: core.next_node,
            next_edge: core.next_edge,
        })
    }

    /// Replaces every edge payload with `f(index, payload)`, preserving
    /// indices and topology.
    pub fn map_edges<E2, F>(&self, mut f: F) -> Graph<N, E2>
    where
        N: Clone,
        F: FnMut(EdgeIndex, &E) -> E2,
    {
        let core = self.core();
        Graph::from_core(GraphCore {
            kind: core.kind,
            nodes: core.nodes.clone(),
            edges: core
                .edges
                .iter()
                .map(|(&ix, record)| {
                    (
                        ix,
                        EdgeRecord {
                            source: record.source,
                            target: record.target,
                            payload: f(ix, &record.payload),
                        },
                    )
                })
                .collect(),
            outgoing: core.outgoing.clone(),
            incoming: core.incoming.clone(),
            next_node: core.next_node,
            next_edge: core.next_edge,
        })
    }

    /// Removes every node failing `predicate`, cascading to incident edges.
    pub fn filter_nodes<P>(&self, mut predicate: P) -> Graph<N, E>
    where
        N: Clone,
        E: Clone,
        P: FnMut(NodeIndex, &N) -> bool,
    {
        let doomed: Vec<NodeIndex> = self
            .nodes()
            .filter(|&(ix, payload)| !predicate(ix, payload))
            .map(|(ix, _)| ix)
            .collect();
        self.with_mutations(|scope| {
            for ix in doomed {
                scope
                    .remove_node(ix)
                    .expect("filtered index is live in the working copy");
            }
        })
    }

    /// Swaps source and target on every edge of a directed graph.
    ///
    /// Adjacency direction maps swap wholesale, so insertion order within
    /// each list is preserved and `reverse(reverse(g)) == g`. For undirected
    /// graphs this is a no-op returning a cheap handle clone.
    pub fn reverse(&self) -> Graph<N, E>
    where
        N: Clone,
        E: Clone,
    {
        if self.kind() == GraphKind::Undirected {
            return self.clone();
        }
        let core = self.core();
        let mut reversed = GraphCore {
            kind: core.kind,
            nodes: core.nodes.clone(),
            edges: core
                .edges
                .iter()
                .map(|(&ix, record)| {
                    (
                        ix,
                        EdgeRecord {
                            source: record.target,
                            target: record.source,
                            payload: record.payload.clone(),
                        },
                    )
                })
                .collect(),
            outgoing: core.outgoing.clone(),
            incoming: core.incoming.clone(),
            next_node: core.next_node,
            next_edge: core.next_edge,
        };
        mem::swap(&mut reversed.outgoing, &mut reversed.incoming);
        Graph::from_core(reversed)
    }
}
