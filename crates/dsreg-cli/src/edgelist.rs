//! Plain-text edge-list parsing.
//!
//! One record per line, fields separated by whitespace:
//!
//! ```text
//! # comment
//! alice bob        # pair (components)
//! alice carol 2.5  # weighted pair (mst)
//! dave             # isolated element
//! ```
//!
//! Labels are interned in first-seen order; label `i` of
//! [`EdgeList::labels`] is referred to by index `i` in every [`Edge`].
use std::collections::HashMap;

use crate::error::CliError;

/// One edge between two interned labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    pub left: usize,
    pub right: usize,
    pub weight: W,
}

/// Parsed edge list.
#[derive(Debug, Clone)]
pub struct EdgeList<W> {
    /// Distinct labels in first-seen order.
    pub labels: Vec<String>,
    /// Edges in file order.
    pub edges: Vec<Edge<W>>,
    index: HashMap<String, usize>,
}

impl<W> EdgeList<W> {
    fn new() -> Self {
        Self {
            labels: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn intern(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), i);
        i
    }
}

/// Parses `LEFT RIGHT` lines.
///
/// # Errors
///
/// Returns [`CliError::MalformedLine`] for a line with more than two fields.
pub fn parse_pairs(text: &str, source: &str) -> Result<EdgeList<()>, CliError> {
    parse(text, source, 2, |_| Ok(()))
}

/// Parses `LEFT RIGHT WEIGHT` lines with a finite `f64` weight.
///
/// # Errors
///
/// Returns [`CliError::MalformedLine`] for a wrong field count or a weight
/// that is not a finite number.
pub fn parse_weighted(text: &str, source: &str) -> Result<EdgeList<f64>, CliError> {
    parse(text, source, 3, |fields| {
        let raw = fields.first().copied().unwrap_or_default();
        match raw.parse::<f64>() {
            Ok(w) if w.is_finite() => Ok(w),
            Ok(_) | Err(_) => Err(format!("invalid weight {raw:?}: expected a finite number")),
        }
    })
}

fn parse<W, F>(text: &str, source: &str, fields: usize, weight_of: F) -> Result<EdgeList<W>, CliError>
where
    F: Fn(&[&str]) -> Result<W, String>,
{
    let mut list = EdgeList::new();

    for (i, raw) in text.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let malformed = |detail: String| CliError::MalformedLine {
            source: source.to_owned(),
            line: i + 1,
            detail,
        };

        if tokens.len() == 1 {
            list.intern(tokens[0]);
        } else if tokens.len() == fields {
            let weight = weight_of(&tokens[2..]).map_err(malformed)?;
            let left = list.intern(tokens[0]);
            let right = list.intern(tokens[1]);
            list.edges.push(Edge {
                left,
                right,
                weight,
            });
        } else {
            return Err(malformed(format!(
                "expected 1 or {fields} fields, found {}",
                tokens.len()
            )));
        }
    }
    Ok(list)
}
