//! Optimal search tree
//!
//! Built once from the solver's root table and read-only afterwards, so a
//! shared reference can serve any number of lookups.

mod builder;
mod node;
mod traversal;

pub use builder::build_tree;
pub use node::Node;
pub use traversal::InOrder;

use std::fmt;

/// Binary search tree over the reduced key set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl SearchTree {
    /// Tree with no nodes; every lookup misses after zero comparisons.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Root node, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; 0 for the empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root())
    }
}

/// Sideways rendering: right subtree above, left below, one level of
/// indentation per depth.
impl fmt::Display for SearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(root, 0, f),
            None => writeln!(f, "<empty>"),
        }
    }
}

fn render(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(right) = node.right() {
        render(right, depth + 1, f)?;
    }
    writeln!(f, "{:indent$}{}", "", node.value(), indent = depth * 4)?;
    if let Some(left) = node.left() {
        render(left, depth + 1, f)?;
    }
    Ok(())
}
