/// Errors returned by [`crate::DisjointSetRegistry`] operations.
///
/// Every failing operation leaves the registry exactly as it was before the
/// call: no node is allocated, no parent pointer or rank is rewritten.
use std::fmt;

use crate::registry::NodeId;

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// All error conditions a registry operation can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registration was attempted after the configured maximum number of
    /// nodes had already been allocated.
    ///
    /// Existing nodes stay valid; every further registration fails the same
    /// way.
    CapacityExceeded {
        /// The configured upper bound on registered nodes.
        max_nodes: usize,
    },

    /// A handle passed to `find`, `union` or an accessor does not belong to
    /// this registry.
    InvalidHandle {
        /// The offending handle.
        id: NodeId,
        /// Number of nodes the registry currently owns; valid ids are
        /// `0..len`.
        len: usize,
    },

    /// Both operands of a `union` already share a root.
    ///
    /// Only produced under [`crate::AlreadyUnifiedPolicy::Reject`]; the
    /// default policy returns the shared root instead.
    AlreadyUnified {
        /// The root both operands resolve to.
        root: NodeId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { max_nodes } => {
                write!(f, "exceeded max number of nodes ({max_nodes})")
            }
            Self::InvalidHandle { id, len } => {
                write!(
                    f,
                    "node {id} does not belong to this registry (registry holds {len} nodes)"
                )
            }
            Self::AlreadyUnified { root } => {
                write!(f, "nodes are already in the same group (root {root})")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
