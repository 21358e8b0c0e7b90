//! Lookups against a built search tree.
//!
//! [`trace`] yields each comparison lazily; [`search`] drains a trace into a
//! [`SearchOutcome`]. Nothing is cached between queries.

use std::cmp::Ordering;
use std::fmt;

use crate::tree::{Node, SearchTree};

/// One comparison made during a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'t> {
    /// Key of the visited node.
    pub value: &'t str,
    /// How the query compared against `value`.
    pub ordering: Ordering,
}

/// Lazy, single-pass descent for one query.
#[derive(Debug)]
pub struct SearchTrace<'t, 'q> {
    next: Option<&'t Node>,
    query: &'q str,
}

impl<'t, 'q> Iterator for SearchTrace<'t, 'q> {
    type Item = Step<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        let ordering = self.query.cmp(node.value());
        self.next = match ordering {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => None,
        };
        Some(Step {
            value: node.value(),
            ordering,
        })
    }
}

/// Start a lookup of `query`, one comparison per `next()`.
pub fn trace<'t, 'q>(tree: &'t SearchTree, query: &'q str) -> SearchTrace<'t, 'q> {
    SearchTrace {
        next: tree.root(),
        query,
    }
}

/// Result of a completed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct SearchOutcome<'t> {
    /// Whether the query matched a node.
    pub found: bool,
    /// Nodes compared against, i.e. `path.len()`.
    pub comparisons: usize,
    /// Visited keys from the root downwards.
    pub path: Vec<&'t str>,
}

/// Look up `query`, recording every visited key.
pub fn search<'t>(tree: &'t SearchTree, query: &str) -> SearchOutcome<'t> {
    let mut path = Vec::new();
    let mut found = false;

    for step in trace(tree, query) {
        path.push(step.value);
        found = step.ordering == Ordering::Equal;
    }

    SearchOutcome {
        found,
        comparisons: path.len(),
        path,
    }
}

impl fmt::Display for SearchOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.path {
            write!(f, "{value} -> ")?;
        }
        f.write_str(if self.found {
            "SUCCESSFUL"
        } else {
            "UNSUCCESSFUL"
        })
    }
}
