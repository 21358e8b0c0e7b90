//! Materialize a tree from a solved root table.

use super::{Node, SearchTree};
use crate::dictionary::KeyRecord;
use crate::solver::Table;

/// Build the search tree whose shape the root table encodes.
///
/// Range `[row, col]` becomes a node for key `root[row][col]`, with its left
/// subtree over `[row, r - 1]` and its right subtree over `[r + 1, col]`.
///
/// # Panics
///
/// Panics if `keys` does not hold exactly `n` keys for the table, or if a root
/// entry lies outside the range it was chosen for. Both mean the table was
/// not produced by the solver for these keys.
pub fn build_tree(roots: &Table<usize>, keys: &[KeyRecord]) -> SearchTree {
    let n = roots.n();
    assert_eq!(
        keys.len(),
        n,
        "root table sized for {n} keys but {} keys supplied",
        keys.len()
    );

    SearchTree {
        root: build_range(roots, keys, 1, n),
        len: n,
    }
}

fn build_range(
    roots: &Table<usize>,
    keys: &[KeyRecord],
    row: usize,
    col: usize,
) -> Option<Box<Node>> {
    if row > col {
        return None;
    }

    let r = roots[(row, col)];
    assert!(
        (row..=col).contains(&r),
        "root table entry ({row}, {col}) = {r} lies outside its range"
    );

    let left = build_range(roots, keys, row, r - 1);
    let right = build_range(roots, keys, r + 1, col);
    Some(Box::new(Node::with_children(
        keys[r - 1].word.clone(),
        left,
        right,
    )))
}
