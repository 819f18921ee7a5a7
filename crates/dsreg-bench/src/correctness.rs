//! Post-operation invariant checkers for correctness validation.

use std::collections::HashSet;

use dsreg_core::{DisjointSetRegistry, NodeId, SpanningForest, connected_components};
use petgraph::graph::UnGraph;

/// Verifies the structural invariants of a registry:
///
/// - every parent chain reaches a root within `len` steps (no cycles)
/// - `group_count` equals the number of roots
/// - `groups()` covers every node exactly once
/// - a root of rank `r` heads a group of at least `2^(r-1)` nodes
pub fn check_registry_invariants<T>(registry: &DisjointSetRegistry<T>) -> Result<(), String> {
    let len = registry.len();

    for node in registry {
        let chain = registry
            .ancestors(node.id())
            .map_err(|e| e.to_string())?
            .take(len + 1)
            .count();
        if chain > len {
            return Err(format!("parent chain from {} does not terminate", node.id()));
        }
    }

    let roots = registry.iter().filter(|node| node.is_root()).count();
    if roots != registry.group_count() {
        return Err(format!(
            "group count mismatch: counter={}, roots={roots}",
            registry.group_count()
        ));
    }

    let groups = registry.groups();
    let mut seen: HashSet<NodeId> = HashSet::with_capacity(len);
    for group in &groups {
        for &id in group {
            if !seen.insert(id) {
                return Err(format!("node {id} appears in more than one group"));
            }
        }
        let root = registry.root_of(group[0]).map_err(|e| e.to_string())?;
        let rank = registry.node(root).map_err(|e| e.to_string())?.rank();
        let min_size = 1usize.checked_shl(rank.saturating_sub(1)).unwrap_or(usize::MAX);
        if group.len() < min_size {
            return Err(format!(
                "root {root} has rank {rank} but its group only has {} nodes",
                group.len()
            ));
        }
    }
    if seen.len() != len {
        return Err(format!("groups cover {} of {len} nodes", seen.len()));
    }
    Ok(())
}

/// Verifies a spanning forest of `graph`:
///
/// - the forest has exactly `nodes - components` edges
/// - no accepted edge closes a cycle
/// - `components` matches an independent connected-components count
pub fn check_spanning_forest<N, W>(
    graph: &UnGraph<N, W>,
    forest: &SpanningForest<W>,
) -> Result<(), String> {
    let expected_components = connected_components(graph)
        .map_err(|e| e.to_string())?
        .len();
    if forest.components != expected_components {
        return Err(format!(
            "component count mismatch: forest={}, graph={expected_components}",
            forest.components
        ));
    }

    if forest.edges.len() + forest.components != graph.node_count() {
        return Err(format!(
            "forest has {} edges for {} nodes in {} components",
            forest.edges.len(),
            graph.node_count(),
            forest.components
        ));
    }

    let mut registry = DisjointSetRegistry::unbounded();
    for index in graph.node_indices() {
        registry.register(index).map_err(|e| e.to_string())?;
    }
    for &edge in &forest.edges {
        let (a, b) = graph
            .edge_endpoints(edge)
            .ok_or_else(|| format!("edge {} not in graph", edge.index()))?;
        let (a, b) = (NodeId::from(a.index()), NodeId::from(b.index()));
        if registry.same_group(a, b).map_err(|e| e.to_string())? {
            return Err(format!("edge {} closes a cycle", edge.index()));
        }
        registry.union(a, b).map_err(|e| e.to_string())?;
    }
    Ok(())
}
