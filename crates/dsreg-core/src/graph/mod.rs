/// Graph algorithms driven by the disjoint-set registry.
///
/// Both algorithms operate on `petgraph` undirected graphs and keep one
/// registry node per graph node, registered in index order so that graph
/// index `i` and registry id `i` always coincide.
///
/// # Connectivity
///
/// See the [`components`] submodule for [`connected_components`].
///
/// # Spanning Forests
///
/// See the [`spanning`] submodule for Kruskal's algorithm
/// ([`minimum_spanning_forest`]).
pub mod components;
pub mod spanning;

pub use components::connected_components;
pub use spanning::{SpanningForest, minimum_spanning_forest};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::RegistryError;
use crate::registry::{DisjointSetRegistry, NodeId};

/// Builds an unbounded registry holding one singleton per node of `graph`.
fn registry_for<N, E>(
    graph: &UnGraph<N, E>,
) -> Result<DisjointSetRegistry<NodeIndex>, RegistryError> {
    let mut registry = DisjointSetRegistry::unbounded();
    for index in graph.node_indices() {
        registry.register(index)?;
    }
    Ok(registry)
}

/// Registry handle for a graph node. Valid for registries from [`registry_for`].
fn handle(index: NodeIndex) -> NodeId {
    NodeId::from(index.index())
}
