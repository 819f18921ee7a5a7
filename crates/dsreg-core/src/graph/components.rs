//! Connected components of an undirected graph.
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::RegistryError;

use super::{handle, registry_for};

/// Partitions the nodes of `graph` into connected components.
///
/// Each component is sorted by node index and components are ordered by
/// their smallest index. Isolated nodes form singleton components.
///
/// # Errors
///
/// Propagates [`RegistryError`] from the internal registry. The registry is
/// unbounded and only ever sees its own handles, so no error is expected in
/// practice.
pub fn connected_components<N, E>(
    graph: &UnGraph<N, E>,
) -> Result<Vec<Vec<NodeIndex>>, RegistryError> {
    let mut registry = registry_for(graph)?;
    for edge in graph.edge_references() {
        registry.union(handle(edge.source()), handle(edge.target()))?;
    }
    debug!(
        "{} nodes, {} edges -> {} components",
        graph.node_count(),
        graph.edge_count(),
        registry.group_count()
    );

    let mut components = Vec::with_capacity(registry.group_count());
    for group in registry.groups() {
        let mut members = Vec::with_capacity(group.len());
        for id in group {
            members.push(*registry.payload(id)?);
        }
        components.push(members);
    }
    Ok(components)
}
