//! Triangular DP table
//!
//! Rows run `0..=n+1`, columns `0..=n`. Only cells with
//! `1 <= i <= j + 1 <= n + 1` are meaningful; row 0 exists so that
//! indices line up with the 1-based recurrence.

use std::ops::Index;

/// Dense table addressed by `(i, j)` over the OBST triangular region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Table<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> Table<T> {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![T::default(); (n + 2) * (n + 1)],
        }
    }

    /// Number of keys the table was sized for.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether `(i, j)` lies inside the triangular region.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i >= 1 && i <= self.n + 1 && j + 1 >= i && j <= self.n
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (self.n + 1) + j
    }

    /// Checked read; `None` outside the triangular region.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.contains(i, j).then(|| self.cells[self.offset(i, j)])
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(
            self.contains(i, j),
            "write to cell ({i}, {j}) outside triangular region for n = {}",
            self.n
        );
        let offset = self.offset(i, j);
        self.cells[offset] = value;
    }

    /// Row `i` across columns `0..=n`, `None` outside the region.
    pub fn row(&self, i: usize) -> Vec<Option<T>> {
        (0..=self.n).map(|j| self.get(i, j)).collect()
    }

    /// Number of rows including the unused row 0.
    pub fn num_rows(&self) -> usize {
        self.n + 2
    }
}

impl<T: Copy + Default> Index<(usize, usize)> for Table<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            self.contains(i, j),
            "cell ({i}, {j}) outside triangular region for n = {}",
            self.n
        );
        &self.cells[self.offset(i, j)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_bounds() {
        let table: Table<f64> = Table::new(3);
        assert!(table.contains(1, 0));
        assert!(table.contains(4, 3));
        assert!(table.contains(1, 3));
        assert!(!table.contains(0, 0));
        assert!(!table.contains(3, 1));
        assert!(!table.contains(1, 4));
        assert!(!table.contains(5, 4));
    }

    #[test]
    fn rows_mark_unused_cells() {
        let mut table: Table<usize> = Table::new(2);
        table.set(1, 2, 2);
        assert_eq!(table.row(0), vec![None, None, None]);
        assert_eq!(table.row(1), vec![Some(0), Some(0), Some(2)]);
        assert_eq!(table.row(3), vec![None, None, Some(0)]);
    }

    #[test]
    #[should_panic(expected = "outside triangular region")]
    fn index_outside_region_panics() {
        let table: Table<f64> = Table::new(2);
        let _cost = table[(2, 0)];
    }
}
