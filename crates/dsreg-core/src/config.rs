//! Construction-time configuration for [`crate::DisjointSetRegistry`].

/// Capacity used when no explicit maximum is configured.
///
/// Matches the fixed node table of earlier union-find implementations.
pub const DEFAULT_MAX_NODES: usize = 1024;

// ---------------------------------------------------------------------------
// AlreadyUnifiedPolicy
// ---------------------------------------------------------------------------

/// What `union` does when both operands already resolve to the same root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlreadyUnifiedPolicy {
    /// Treat the call as a no-op and return the shared root (default).
    #[default]
    Ignore,
    /// Return [`crate::RegistryError::AlreadyUnified`] without touching state.
    Reject,
}

// ---------------------------------------------------------------------------
// RegistryConfig
// ---------------------------------------------------------------------------

/// Configuration for a disjoint-set registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Upper bound on the number of registered nodes. `None` lets the arena
    /// grow without limit.
    ///
    /// Default: `Some(DEFAULT_MAX_NODES)`.
    pub max_nodes: Option<usize>,

    /// Behaviour of `union` on operands that are already in one group.
    ///
    /// Default: [`AlreadyUnifiedPolicy::Ignore`].
    pub on_already_unified: AlreadyUnifiedPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_nodes: Some(DEFAULT_MAX_NODES),
            on_already_unified: AlreadyUnifiedPolicy::default(),
        }
    }
}

impl RegistryConfig {
    /// Returns a copy of this configuration bounded to `max_nodes` nodes.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Returns a copy of this configuration with the capacity limit lifted.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_nodes = None;
        self
    }

    /// Returns a copy of this configuration using `policy` for redundant unions.
    #[must_use]
    pub fn with_policy(mut self, policy: AlreadyUnifiedPolicy) -> Self {
        self.on_already_unified = policy;
        self
    }
}
