//! Stable integer identifiers for graph elements.
//!
//! Indices are assigned monotonically within a snapshot lineage and are never
//! reused after removal, so a stale index held by a caller can only miss — it
//! never silently aliases a newer element. Both index types are thin newtypes
//! over `usize` and order exactly like their underlying integers, which is
//! what gives ordered storage its deterministic index-order iteration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node within a graph lineage.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    #[inline]
    pub(crate) const fn new(ix: usize) -> Self {
        NodeIndex(ix)
    }

    /// Returns the underlying integer value.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

/// Identifier of an edge within a graph lineage.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    #[inline]
    pub(crate) const fn new(ix: usize) -> Self {
        EdgeIndex(ix)
    }

    /// Returns the underlying integer value.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIndex({})", self.0)
    }
}
