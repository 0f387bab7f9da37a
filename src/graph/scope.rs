//! Scoped batch mutation over a snapshot.
//!
//! A [`MutScope`] is a write capability over a private, exclusively-owned
//! working copy of graph storage. The copy is made once at scope entry
//! (O(V+E)); every edit inside the scope then mutates uniquely-owned storage
//! in place with no per-edit copying. On exit the working copy freezes into a
//! new immutable snapshot and the input graph is untouched.
//!
//! The capability must not outlive its scope. Rust enforces that statically:
//! the body only ever sees `&mut MutScope`, and the anonymous lifetime of
//! that borrow keeps it from being smuggled out of the closure — the same
//! non-escaping discipline a branded ghost token provides, paid for entirely
//! at compile time.

use crate::error::GraphError;
use crate::graph::snapshot::Graph;
use crate::graph::storage::GraphCore;
use crate::index::{EdgeIndex, NodeIndex};

/// An exclusive write capability over a private working copy of a graph.
///
/// Obtained only through [`Graph::with_mutations`]; cannot be constructed,
/// cloned, or retained past the scope body.
pub struct MutScope<N, E> {
    core: GraphCore<N, E>,
}

impl<N, E> MutScope<N, E> {
    /// Adds a node and returns its freshly-assigned index.
    pub fn add_node(&mut self, payload: N) -> NodeIndex {
        self.core.add_node(payload)
    }

    /// Adds an edge between two live nodes.
    ///
    /// Fails with [`GraphError::UnknownNode`] if either endpoint is missing.
    /// Self-loops and parallel edges are valid and never fail.
    pub fn add_edge(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        payload: E,
    ) -> Result<EdgeIndex, GraphError> {
        self.core.add_edge(source, target, payload)
    }

    /// Removes a node and every incident edge, returning the node's payload.
    pub fn remove_node(&mut self, ix: NodeIndex) -> Result<N, GraphError> {
        self.core.remove_node(ix)
    }

    /// Removes an edge, returning its payload.
    pub fn remove_edge(&mut self, ix: EdgeIndex) -> Result<E, GraphError> {
        self.core.remove_edge(ix)
    }

    /// Number of live nodes in the working copy.
    pub fn node_count(&self) -> usize {
        self.core.nodes.len()
    }

    /// Number of live edges in the working copy.
    pub fn edge_count(&self) -> usize {
        self.core.edges.len()
    }

    /// Whether `ix` names a live node in the working copy.
    pub fn contains_node(&self, ix: NodeIndex) -> bool {
        self.core.nodes.contains_key(&ix)
    }

    /// Whether `ix` names a live edge in the working copy.
    pub fn contains_edge(&self, ix: EdgeIndex) -> bool {
        self.core.edges.contains_key(&ix)
    }

    /// Shared access to a node payload in the working copy.
    pub fn node_payload(&self, ix: NodeIndex) -> Option<&N> {
        self.core.nodes.get(&ix)
    }

    /// In-place mutable access to a node payload in the working copy.
    pub fn node_payload_mut(&mut self, ix: NodeIndex) -> Option<&mut N> {
        self.core.nodes.get_mut(&ix)
    }

    /// Shared access to an edge payload in the working copy.
    pub fn edge_payload(&self, ix: EdgeIndex) -> Option<&E> {
        self.core.edges.get(&ix).map(|record| &record.payload)
    }

    /// In-place mutable access to an edge payload in the working copy.
    pub fn edge_payload_mut(&mut self, ix: EdgeIndex) -> Option<&mut E> {
        self.core
            .edges
            .get_mut(&ix)
            .map(|record| &mut record.payload)
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Runs `body` with a scoped write capability and freezes the result
    /// into a new snapshot.
    ///
    /// The working copy is cloned from this snapshot once, up front; edits
    /// inside the scope are in-place. The input snapshot is unaffected and
    /// remains valid for any other readers. Concurrent scopes over the same
    /// snapshot each produce an independent successor.
    ///
    /// # Example
    ///
    /// ```
    /// use strata::Graph;
    ///
    /// let g: Graph<&str, u32> = Graph::empty_directed();
    /// let g = g.with_mutations(|scope| {
    ///     let a = scope.add_node("a");
    ///     let b = scope.add_node("b");
    ///     scope.add_edge(a, b, 1).unwrap();
    /// });
    /// assert_eq!(g.node_count(), 2);
    /// assert_eq!(g.edge_count(), 1);
    /// ```
    pub fn with_mutations<F>(&self, body: F) -> Graph<N, E>
    where
        F: FnOnce(&mut MutScope<N, E>),
    {
        let mut scope = MutScope {
            core: (*self.core).clone(),
        };
        body(&mut scope);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            nodes = scope.core.nodes.len(),
            edges = scope.core.edges.len(),
            "mutation scope frozen into snapshot"
        );
        Graph::from_core(scope.core)
    }

    /// Adds one node through an implicit single-edit scope.
    pub fn add_node(&self, payload: N) -> (Graph<N, E>, NodeIndex) {
        let mut ix = None;
        let graph = self.with_mutations(|scope| ix = Some(scope.add_node(payload)));
        (graph, ix.expect("scope body ran"))
    }

    /// Adds one edge through an implicit single-edit scope.
    pub fn add_edge(
        &self,
        source: NodeIndex,
        target: NodeIndex,
        payload: E,
    ) -> Result<(Graph<N, E>, EdgeIndex), GraphError> {
        let mut result = None;
        let graph =
            self.with_mutations(|scope| result = Some(scope.add_edge(source, target, payload)));
        let ix = result.expect("scope body ran")?;
        Ok((graph, ix))
    }

    /// Removes one node (and incident edges) through an implicit
    /// single-edit scope, returning the payload.
    pub fn remove_node(&self, ix: NodeIndex) -> Result<(Graph<N, E>, N), GraphError> {
        let mut result = None;
        let graph = self.with_mutations(|scope| result = Some(scope.remove_node(ix)));
        let payload = result.expect("scope body ran")?;
        Ok((graph, payload))
    }

    /// Removes one edge through an implicit single-edit scope, returning the
    /// payload.
    pub fn remove_edge(&self, ix: EdgeIndex) -> Result<(Graph<N, E>, E), GraphError> {
        let mut result = None;
        let graph = self.with_mutations(|scope| result = Some(scope.remove_edge(ix)));
        let payload = result.expect("scope body ran")?;
        Ok((graph, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::storage::GraphKind;

    #[test]
    fn scope_freezes_a_new_snapshot_and_leaves_input_untouched() {
        let g: Graph<i32, i32> = Graph::new(GraphKind::Directed);
        let (g, a) = g.add_node(1);
        let (g, b) = g.add_node(2);

        let g2 = g.with_mutations(|scope| {
            scope.add_edge(a, b, 10).unwrap();
            scope.add_node(3);
        });

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g2.node_count(), 3);
        assert_eq!(g2.edge_count(), 1);
    }

    #[test]
    fn concurrent_scopes_diverge_independently() {
        let g: Graph<i32, ()> = Graph::empty_directed();
        let (g, a) = g.add_node(1);

        let left = g.with_mutations(|scope| {
            scope.add_node(2);
        });
        let right = g.with_mutations(|scope| {
            scope.remove_node(a).unwrap();
        });

        assert_eq!(g.node_count(), 1);
        assert_eq!(left.node_count(), 2);
        assert_eq!(right.node_count(), 0);
    }

    #[test]
    fn failed_edits_inside_a_scope_surface_at_the_call() {
        let g: Graph<(), ()> = Graph::empty_directed();
        let ghost = NodeIndex::new(42);
        let g2 = g.with_mutations(|scope| {
            assert_eq!(
                scope.add_edge(ghost, ghost, ()),
                Err(GraphError::UnknownNode(ghost))
            );
            assert_eq!(scope.remove_node(ghost), Err(GraphError::UnknownNode(ghost)));
        });
        assert_eq!(g2.node_count(), 0);
    }

    #[test]
    fn payload_mutation_in_place() {
        let g: Graph<i32, i32> = Graph::empty_directed();
        let (g, a) = g.add_node(1);
        let (g, b) = g.add_node(2);
        let (g, e) = g.add_edge(a, b, 5).unwrap();

        let g2 = g.with_mutations(|scope| {
            *scope.node_payload_mut(a).unwrap() += 100;
            *scope.edge_payload_mut(e).unwrap() *= 2;
        });

        assert_eq!(g2.get_node(a), Some(&101));
        assert_eq!(*g2.get_edge(e).unwrap().payload(), 10);
        assert_eq!(g.get_node(a), Some(&1));
    }

    #[test]
    fn scope_equals_sequential_single_edits() {
        let batched: Graph<i32, i32> = Graph::empty_undirected().with_mutations(|scope| {
            let a = scope.add_node(1);
            let b = scope.add_node(2);
            let c = scope.add_node(3);
            scope.add_edge(a, b, 1).unwrap();
            scope.add_edge(b, c, 2).unwrap();
        });

        let g: Graph<i32, i32> = Graph::empty_undirected();
        let (g, a) = g.add_node(1);
        let (g, b) = g.add_node(2);
        let (g, c) = g.add_node(3);
        let (g, _) = g.add_edge(a, b, 1).unwrap();
        let (sequential, _) = g.add_edge(b, c, 2).unwrap();

        assert_eq!(batched, sequential);
    }
}
