//! Implementation of `dsreg mst`.
//!
//! Builds an undirected `petgraph` graph from a weighted edge list and prints
//! the minimum spanning forest found by Kruskal's algorithm.
//!
//! Exit codes: 0 = success, 2 = input failure.
use dsreg_core::minimum_spanning_forest;
use log::info;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::cli::{OutputFormat, PathOrStdin};
use crate::edgelist::{EdgeList, parse_weighted};
use crate::error::CliError;
use crate::io::read_input;

/// One accepted forest edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestEdge {
    pub left: String,
    pub right: String,
    pub weight: f64,
}

/// The spanning forest of the edge list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstReport {
    pub edges: Vec<ForestEdge>,
    pub total_weight: f64,
    pub components: usize,
}

/// Runs the `mst` command.
///
/// # Errors
///
/// Returns [`CliError`] if the input cannot be read or parsed.
pub fn run(file: &PathOrStdin, max_file_size: u64, format: OutputFormat) -> Result<(), CliError> {
    let text = read_input(file, max_file_size)?;
    let list = parse_weighted(&text, &file.label())?;
    let report = build(&list)?;
    info!(
        "kept {} of {} edges, {} trees",
        report.edges.len(),
        list.edges.len(),
        report.components
    );
    super::emit(format, &report, render_human)
}

/// Computes the minimum spanning forest of `list`.
///
/// # Errors
///
/// Returns [`CliError::Registry`] if the registry fails and
/// [`CliError::InternalError`] if an accepted edge cannot be resolved; neither
/// is expected.
pub fn build(list: &EdgeList<f64>) -> Result<MstReport, CliError> {
    let mut graph: UnGraph<&str, f64> =
        UnGraph::with_capacity(list.labels.len(), list.edges.len());
    for label in &list.labels {
        graph.add_node(label.as_str());
    }
    for edge in &list.edges {
        graph.add_edge(
            NodeIndex::new(edge.left),
            NodeIndex::new(edge.right),
            edge.weight,
        );
    }

    let forest = minimum_spanning_forest(&graph)?;

    let mut edges = Vec::with_capacity(forest.edges.len());
    for &index in &forest.edges {
        let (left, right) = graph
            .edge_endpoints(index)
            .ok_or_else(|| CliError::InternalError {
                detail: format!("spanning edge {} missing from graph", index.index()),
            })?;
        edges.push(ForestEdge {
            left: graph[left].to_owned(),
            right: graph[right].to_owned(),
            weight: graph[index],
        });
    }

    Ok(MstReport {
        edges,
        total_weight: forest.total_weight,
        components: forest.components,
    })
}

fn render_human(report: &MstReport) -> String {
    let mut lines: Vec<String> = report
        .edges
        .iter()
        .map(|e| format!("{} {} {}", e.left, e.right, e.weight))
        .collect();
    lines.push(format!("total weight: {}", report.total_weight));
    lines.push(format!("components: {}", report.components));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn spanning_tree_of_small_graph() {
        let list = parse_weighted("a b 1\nb c 2\na c 3\nc d 4\nb d 5\n", "-").expect("parse");
        let report = build(&list).expect("build");
        let picked: Vec<(&str, &str)> = report
            .edges
            .iter()
            .map(|e| (e.left.as_str(), e.right.as_str()))
            .collect();
        assert_eq!(picked, vec![("a", "b"), ("b", "c"), ("c", "d")]);
        assert!((report.total_weight - 7.0).abs() < f64::EPSILON);
        assert_eq!(report.components, 1);
        assert_eq!(
            render_human(&report),
            "a b 1\nb c 2\nc d 4\ntotal weight: 7\ncomponents: 1"
        );
    }

    #[test]
    fn isolated_labels_count_as_components() {
        let list = parse_weighted("a b 0.5\nlonely\n", "-").expect("parse");
        let report = build(&list).expect("build");
        assert_eq!(report.edges.len(), 1);
        assert_eq!(report.components, 2);
    }
}
