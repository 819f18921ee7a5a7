//! Kruskal's algorithm for minimum spanning forests.
//!
//! Edges are considered in ascending weight order (stable, so equal weights
//! keep insertion order) and accepted whenever their endpoints are still in
//! different groups of the registry.
use std::cmp::Ordering;
use std::ops::Add;

use log::debug;
use petgraph::graph::{EdgeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::RegistryError;

use super::{handle, registry_for};

/// Result of [`minimum_spanning_forest`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<W> {
    /// Accepted edges in the order Kruskal picked them.
    pub edges: Vec<EdgeIndex>,
    /// Sum of the accepted edge weights.
    pub total_weight: W,
    /// Number of trees in the forest (1 for a connected, non-empty graph).
    pub components: usize,
}

/// Computes a minimum spanning forest of `graph`.
///
/// Self-loops are never accepted. Edges whose weight is not comparable with
/// itself (a floating-point `NaN`) are skipped.
///
/// # Errors
///
/// Propagates [`RegistryError`] from the internal registry. The registry is
/// unbounded and only ever sees its own handles, so no error is expected in
/// practice.
pub fn minimum_spanning_forest<N, W>(
    graph: &UnGraph<N, W>,
) -> Result<SpanningForest<W>, RegistryError>
where
    W: PartialOrd + Copy + Add<Output = W> + Default,
{
    let mut registry = registry_for(graph)?;

    let mut candidates: Vec<_> = graph
        .edge_references()
        .filter(|edge| edge.weight().partial_cmp(edge.weight()).is_some())
        .collect();
    candidates.sort_by(|a, b| a.weight().partial_cmp(b.weight()).unwrap_or(Ordering::Equal));

    let mut edges = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut total_weight = W::default();
    for edge in candidates {
        let (source, target) = (handle(edge.source()), handle(edge.target()));
        if registry.same_group(source, target)? {
            continue;
        }
        registry.union(source, target)?;
        edges.push(edge.id());
        total_weight = total_weight + *edge.weight();
    }

    debug!(
        "spanning forest: accepted {} of {} edges, {} trees",
        edges.len(),
        graph.edge_count(),
        registry.group_count()
    );
    Ok(SpanningForest {
        edges,
        total_weight,
        components: registry.group_count(),
    })
}
