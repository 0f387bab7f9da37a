//! The graph container: storage, snapshots, scoped mutation, transforms.
//!
//! Organized by concern:
//! - `storage`: exclusively-owned backing storage and adjacency invariants
//! - `snapshot`: the immutable, cheaply-shared `Graph` handle and queries
//! - `scope`: the scoped batch-mutation capability
//! - `transform`: whole-graph map/filter/reverse passes

mod scope;
mod snapshot;
pub(crate) mod storage;
mod transform;

pub use scope::MutScope;
pub use snapshot::{EdgeRef, Graph};
pub use storage::{Direction, GraphKind};
