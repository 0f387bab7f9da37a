//! Error taxonomy for graph operations.
//!
//! Two families share one enum: programming errors (an index used where a
//! live element is required) and unmet algorithmic preconditions (cyclic
//! input to a topological sort, negative cycles, odd cycles). Both are
//! carried in return values at the violating call; there is no global error
//! state. Unreachability in shortest-path queries is not an error and is
//! reported as an absent `Option` instead.

use thiserror::Error;

use crate::index::{EdgeIndex, NodeIndex};

/// Failure modes of graph mutations and algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation referenced a node index that is not live in the graph.
    #[error("unknown node index {0:?}")]
    UnknownNode(NodeIndex),
    /// An operation referenced an edge index that is not live in the graph.
    #[error("unknown edge index {0:?}")]
    UnknownEdge(EdgeIndex),
    /// A topological order was requested on a graph containing a cycle.
    #[error("graph contains a cycle")]
    CyclicGraph,
    /// A negative-sum cycle makes shortest-path distances unbounded below.
    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,
    /// An odd-length cycle prevents a two-coloring of the graph.
    #[error("graph contains an odd-length cycle and is not bipartite")]
    OddCycle,
}
