//! Owned tree node
//!
//! Each node exclusively owns up to two children. There are no parent
//! links; the tree is never rebalanced after construction.

use std::fmt;

/// Binary search tree node holding one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Create a childless node.
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            left: None,
            right: None,
        }
    }

    /// Create a node with the given subtrees.
    pub fn with_children(
        value: impl Into<String>,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    ) -> Self {
        Self {
            value: value.into(),
            left,
            right,
        }
    }

    /// Key stored at this node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Left subtree (keys ordered before this one).
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right subtree (keys ordered after this one).
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted here; a leaf has height 1.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_counts_levels() {
        let node = Node::with_children(
            "m",
            Some(Box::new(Node::with_children(
                "c",
                Some(Box::new(Node::leaf("a"))),
                None,
            ))),
            Some(Box::new(Node::leaf("x"))),
        );

        assert_eq!(node.height(), 3);
        assert!(!node.is_leaf());
        assert!(node.right().unwrap().is_leaf());
        assert_eq!(node.left().unwrap().left().unwrap().value(), "a");
    }
}
