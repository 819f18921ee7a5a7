#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod config;
pub mod error;
pub mod graph;
pub mod registry;

pub use config::{AlreadyUnifiedPolicy, DEFAULT_MAX_NODES, RegistryConfig};
pub use error::RegistryError;
pub use graph::{SpanningForest, connected_components, minimum_spanning_forest};
pub use registry::{Ancestors, DisjointSetRegistry, Node, NodeId};

/// Returns the current version of the dsreg-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
