//! Implementation of `dsreg components`.
//!
//! Registers every label of an edge list in a registry, unites the endpoints
//! of every edge, and prints one group per line. Labels inside a group and
//! the groups themselves appear in first-seen order.
//!
//! Exit codes: 0 = success, 1 = `--max-nodes` exceeded, 2 = input failure.
use dsreg_core::{DisjointSetRegistry, RegistryConfig, RegistryError};
use log::info;
use serde::Serialize;

use crate::cli::{OutputFormat, PathOrStdin};
use crate::edgelist::{EdgeList, parse_pairs};
use crate::error::CliError;
use crate::io::read_input;

/// Partition of the edge list's labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentsReport {
    pub node_count: usize,
    pub group_count: usize,
    pub groups: Vec<Vec<String>>,
}

/// Runs the `components` command.
///
/// # Errors
///
/// Returns [`CliError`] if the input cannot be read or parsed, or if it names
/// more than `max_nodes` distinct labels.
pub fn run(
    file: &PathOrStdin,
    max_nodes: Option<usize>,
    max_file_size: u64,
    format: OutputFormat,
) -> Result<(), CliError> {
    let text = read_input(file, max_file_size)?;
    let list = parse_pairs(&text, &file.label())?;
    let report = build(&list, max_nodes)?;
    info!(
        "{} elements, {} edges, {} groups",
        report.node_count,
        list.edges.len(),
        report.group_count
    );
    super::emit(format, &report, render_human)
}

/// Groups the labels of `list` with a registry bounded by `max_nodes`.
///
/// # Errors
///
/// Returns [`RegistryError::CapacityExceeded`] when `list` has more than
/// `max_nodes` distinct labels.
pub fn build(
    list: &EdgeList<()>,
    max_nodes: Option<usize>,
) -> Result<ComponentsReport, RegistryError> {
    let config = match max_nodes {
        Some(n) => RegistryConfig::default().with_max_nodes(n),
        None => RegistryConfig::default().unbounded(),
    };
    let mut reg = DisjointSetRegistry::with_config(config);

    let mut ids = Vec::with_capacity(list.labels.len());
    for label in &list.labels {
        ids.push(reg.register(label.as_str())?);
    }
    for edge in &list.edges {
        reg.union(ids[edge.left], ids[edge.right])?;
    }

    let mut groups = Vec::with_capacity(reg.group_count());
    for group in reg.groups() {
        let mut labels = Vec::with_capacity(group.len());
        for id in group {
            labels.push((*reg.payload(id)?).to_owned());
        }
        groups.push(labels);
    }

    Ok(ComponentsReport {
        node_count: reg.len(),
        group_count: reg.group_count(),
        groups,
    })
}

fn render_human(report: &ComponentsReport) -> String {
    report
        .groups
        .iter()
        .map(|group| group.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn list(text: &str) -> EdgeList<()> {
        parse_pairs(text, "-").expect("parse")
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let report = build(&list("x y\nz\nw y\nz v\n"), None).expect("build");
        assert_eq!(report.node_count, 5);
        assert_eq!(report.group_count, 2);
        assert_eq!(
            report.groups,
            vec![
                vec!["x".to_owned(), "y".to_owned(), "w".to_owned()],
                vec!["z".to_owned(), "v".to_owned()],
            ]
        );
        assert_eq!(render_human(&report), "x y w\nz v");
    }

    #[test]
    fn max_nodes_is_enforced() {
        let edges = list("a b\nc d\n");
        assert!(build(&edges, Some(4)).is_ok());
        assert_eq!(
            build(&edges, Some(3)),
            Err(RegistryError::CapacityExceeded { max_nodes: 3 })
        );
    }

    #[test]
    fn empty_list_has_no_groups() {
        let report = build(&list("# nothing\n"), None).expect("build");
        assert_eq!(report.group_count, 0);
        assert_eq!(render_human(&report), "");
    }
}
