//! Implementation of `dsreg demo`.
//!
//! Registers four nodes `a`, `b`, `c`, `d` carrying the same payload, then
//! runs `union(a, b)`, `union(c, d)`, `union(b, d)` and `find(d)`, reporting
//! the parent links observed along the way.
//!
//! Exit codes: 0 = success, 2 = stdout could not be written.
use dsreg_core::{DisjointSetRegistry, NodeId, RegistryError};
use log::info;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// One value per demo node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerNode {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
}

/// Everything the demo observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Payload read back from node `a`.
    pub payload: i64,
    /// Ids assigned at registration.
    pub ids: PerNode,
    /// `a`'s parent before any union.
    pub a_parent_initial: usize,
    /// `b`'s parent right after `union(a, b)`.
    pub b_parent_after_first_union: usize,
    /// Parent ids after all unions and `find(d)`.
    pub parents: PerNode,
    /// Whether all six pairwise `find` comparisons agree.
    pub one_group: bool,
}

/// Runs the `demo` command.
///
/// # Errors
///
/// Returns [`CliError`] if the registry rejects an operation or the report
/// cannot be serialized.
pub fn run(payload: i64, format: OutputFormat) -> Result<(), CliError> {
    let report = build(payload)?;
    info!("demo finished, one group: {}", report.one_group);
    super::emit(format, &report, render_human)
}

/// Runs the four-node scenario against a fresh default registry.
///
/// # Errors
///
/// Propagates [`RegistryError`]; none is expected for four nodes.
pub fn build(payload: i64) -> Result<DemoReport, RegistryError> {
    let mut reg = DisjointSetRegistry::new();
    let a = reg.register(payload)?;
    let b = reg.register(payload)?;
    let c = reg.register(payload)?;
    let d = reg.register(payload)?;
    let a_parent_initial = reg.node(a)?.parent().index();

    reg.union(a, b)?;
    let b_parent_after_first_union = reg.node(b)?.parent().index();
    reg.union(c, d)?;
    reg.union(b, d)?;
    reg.find(d)?;

    let parent = |id: NodeId| reg.node(id).map(|node| node.parent().index());
    let parents = PerNode {
        a: parent(a)?,
        b: parent(b)?,
        c: parent(c)?,
        d: parent(d)?,
    };

    let all = [a, b, c, d];
    let mut one_group = true;
    for (i, &x) in all.iter().enumerate() {
        for &y in &all[i + 1..] {
            one_group &= reg.find(x)? == reg.find(y)?;
        }
    }

    Ok(DemoReport {
        payload: *reg.payload(a)?,
        ids: PerNode {
            a: a.index(),
            b: b.index(),
            c: c.index(),
            d: d.index(),
        },
        a_parent_initial,
        b_parent_after_first_union,
        parents,
        one_group,
    })
}

fn render_human(report: &DemoReport) -> String {
    [
        format!("a's payload: {}", report.payload),
        format!("a's parent's id: {}", report.a_parent_initial),
        format!("a's id: {}", report.ids.a),
        "before union(a, b)".to_owned(),
        "after union(a, b)".to_owned(),
        format!("b's parent's id: {}", report.b_parent_after_first_union),
        format!("d's parent's id: {}", report.parents.d),
        format!("c's parent's id: {}", report.parents.c),
        format!("b's parent's id: {}", report.parents.b),
        format!("all four in one group: {}", report.one_group),
    ]
    .join("\n")
}
