//! Optimal binary search tree solver
//!
//! Classic O(n³) dynamic program over key ranges `[i, j]`:
//!
//! ```text
//! e[i][i-1] = w[i][i-1] = q[i-1]
//! w[i][j]   = w[i][j-1] + p[j] + q[j]
//! e[i][j]   = min_{i <= r <= j} e[i][r-1] + e[r+1][j] + w[i][j]
//! ```
//!
//! Ties keep the leftmost root, so identical inputs always produce the
//! same tables.

mod table;

pub use table::Table;

use thiserror::Error;
use tracing::debug;

/// Errors rejected before the dynamic program runs.
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// There are no keys to arrange.
    #[error("cannot build a search tree over zero keys")]
    EmptyKeySet,

    /// A probability vector has the wrong length for `n`.
    #[error("{vector} has length {actual}, expected {expected}")]
    LengthMismatch {
        /// Which vector (`p` or `q`).
        vector: &'static str,
        /// Length required by `n`.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// A probability is negative, NaN or infinite.
    #[error("{vector}[{index}] = {value} is not a valid probability")]
    InvalidProbability {
        /// Which vector (`p` or `q`).
        vector: &'static str,
        /// Position inside the vector.
        index: usize,
        /// Offending value.
        value: f64,
    },
}

/// Filled cost, weight and root tables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ObstSolution {
    cost: Table<f64>,
    weight: Table<f64>,
    root: Table<usize>,
}

impl ObstSolution {
    /// Number of keys.
    pub fn n(&self) -> usize {
        self.cost.n()
    }

    /// Minimum expected search cost `e[1][n]`.
    pub fn expected_cost(&self) -> f64 {
        self.cost[(1, self.n())]
    }

    /// 1-based index of the overall tree root, `root[1][n]`.
    pub fn root_index(&self) -> usize {
        self.root[(1, self.n())]
    }

    /// Root chosen for range `[i, j]`; `None` for empty ranges and cells
    /// outside the table.
    pub fn root(&self, i: usize, j: usize) -> Option<usize> {
        if j < i {
            return None;
        }
        self.root.get(i, j)
    }

    /// Cost table `e`.
    pub fn cost(&self) -> &Table<f64> {
        &self.cost
    }

    /// Weight table `w`.
    pub fn weight(&self) -> &Table<f64> {
        &self.weight
    }

    /// Root table.
    pub fn roots(&self) -> &Table<usize> {
        &self.root
    }

    /// Split into `(e, root)`, dropping the weight table.
    pub fn into_parts(self) -> (Table<f64>, Table<usize>) {
        (self.cost, self.root)
    }
}

/// Fill the OBST tables for `n` keys.
///
/// `p[k]` is the match probability of key `k + 1`; `q[k]` is the gap
/// probability `q_k` for `k` in `0..=n`.
pub fn solve_obst(p: &[f64], q: &[f64], n: usize) -> Result<ObstSolution, SolverError> {
    validate(p, q, n)?;

    let mut cost = Table::new(n);
    let mut weight = Table::new(n);
    let mut root = Table::new(n);

    for i in 1..=n + 1 {
        cost.set(i, i - 1, q[i - 1]);
        weight.set(i, i - 1, q[i - 1]);
    }

    for len in 1..=n {
        for i in 1..=n - len + 1 {
            let j = i + len - 1;
            let w = weight[(i, j - 1)] + p[j - 1] + q[j];
            weight.set(i, j, w);

            let mut best = f64::INFINITY;
            let mut best_root = i;
            for r in i..=j {
                let t = cost[(i, r - 1)] + cost[(r + 1, j)] + w;
                if t < best {
                    best = t;
                    best_root = r;
                }
            }

            cost.set(i, j, best);
            root.set(i, j, best_root);
        }
    }

    let solution = ObstSolution { cost, weight, root };
    debug!(
        n,
        expected_cost = solution.expected_cost(),
        root = solution.root_index(),
        "solved optimal search tree"
    );
    Ok(solution)
}

fn validate(p: &[f64], q: &[f64], n: usize) -> Result<(), SolverError> {
    if n == 0 {
        return Err(SolverError::EmptyKeySet);
    }
    if p.len() != n {
        return Err(SolverError::LengthMismatch {
            vector: "p",
            expected: n,
            actual: p.len(),
        });
    }
    if q.len() != n + 1 {
        return Err(SolverError::LengthMismatch {
            vector: "q",
            expected: n + 1,
            actual: q.len(),
        });
    }

    for (vector, values) in [("p", p), ("q", q)] {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(SolverError::InvalidProbability {
                vector,
                index,
                value,
            });
        }
    }

    Ok(())
}
