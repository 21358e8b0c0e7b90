//! In-order traversal
//!
//! Explicit stack of pending ancestors, so deep (skewed) trees do not
//! recurse. Stack depth is bounded by the tree height.

use super::Node;

/// Iterator over node values in ascending key order.
#[derive(Debug)]
pub struct InOrder<'t> {
    stack: Vec<&'t Node>,
}

impl<'t> InOrder<'t> {
    pub(crate) fn new(root: Option<&'t Node>) -> Self {
        let mut traversal = Self { stack: Vec::new() };
        traversal.push_left_spine(root);
        traversal
    }

    fn push_left_spine(&mut self, mut node: Option<&'t Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'t> Iterator for InOrder<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}
