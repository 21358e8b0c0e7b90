//! # Optimal Binary Search Trees over Word Frequencies
//!
//! Builds the binary search tree that minimizes expected lookup cost for a
//! weighted key set, then answers lookups against it while reporting the
//! comparison path.
//!
//! ## Pipeline
//!
//! 1. **Load**: read `frequency word` lines, keep keys at or above a threshold
//! 2. **Probabilities**: `p[i]` for exact hits, `q[i]` for the gaps between keys
//! 3. **Solve**: O(n³) dynamic program filling cost, weight and root tables
//! 4. **Build**: materialize the tree encoded by the root table
//! 5. **Search**: descend the tree, counting comparisons
//!
//! ## Usage Example
//!
//! ```
//! use obst::{FrequencyTable, KeyRecord, ObstConfig, OptimalSearchIndex};
//!
//! let records = vec![
//!     KeyRecord::new(60_000, "apple"),
//!     KeyRecord::new(55_000, "banana"),
//!     KeyRecord::new(70_000, "cherry"),
//!     KeyRecord::new(30, "date"),
//! ];
//! let table = FrequencyTable::from_records(records, 50_000)?;
//! let index = OptimalSearchIndex::build(&table, &ObstConfig::default())?;
//!
//! let outcome = index.search("banana");
//! assert!(outcome.found);
//! # Ok::<(), obst::ObstError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod dictionary;  // Frequency file loading
pub mod probability; // p/q derivation
pub mod solver;      // Dynamic program and tables
pub mod tree;        // Tree materialization and traversal
pub mod search;      // Traced lookups
pub mod report;      // Table dumps and fingerprints

// Re-exports for convenience
pub use dictionary::{FrequencyTable, KeyRecord, LoadError, LoaderOptions, DEFAULT_THRESHOLD};
pub use probability::{
    build_probabilities, build_probabilities_with, GapAccounting, Probabilities, ProbabilityError,
};
pub use solver::{solve_obst, ObstSolution, SolverError, Table};
pub use tree::{build_tree, Node, SearchTree};
pub use search::{search, trace, SearchOutcome, SearchTrace, Step};

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Configuration for building an index from a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstConfig {
    /// Minimum frequency for a key to become a tree node.
    pub threshold: u64,

    /// How the gap before the first key is accounted.
    pub gap_accounting: GapAccounting,

    /// Abort loading on the first malformed record.
    pub strict: bool,
}

impl Default for ObstConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            gap_accounting: GapAccounting::Frequency,
            strict: true,
        }
    }
}

impl ObstConfig {
    /// Override the inclusion threshold.
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override gap accounting.
    pub fn with_gap_accounting(mut self, gap_accounting: GapAccounting) -> Self {
        self.gap_accounting = gap_accounting;
        self
    }

    /// Skip malformed records instead of failing.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Loader options derived from this configuration.
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            threshold: self.threshold,
            strict: self.strict,
        }
    }
}

/// Errors that can occur while building an index
#[derive(Error, Debug)]
pub enum ObstError {
    /// Dictionary could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Probabilities could not be derived
    #[error(transparent)]
    Probability(#[from] ProbabilityError),

    /// Solver rejected its input
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Solved tables plus the tree they describe.
///
/// Queries only need shared access, so one index can serve many readers.
#[derive(Debug, Clone)]
pub struct OptimalSearchIndex {
    probabilities: Probabilities,
    solution: ObstSolution,
    tree: SearchTree,
}

impl OptimalSearchIndex {
    /// Run probabilities, solver and tree builder over a loaded table.
    pub fn build(table: &FrequencyTable, config: &ObstConfig) -> Result<Self, ObstError> {
        let probabilities = build_probabilities_with(
            table.full(),
            table.reduced(),
            table.freq_sum(),
            config.gap_accounting,
        )?;
        let solution = solve_obst(probabilities.p(), probabilities.q(), probabilities.n())?;
        let tree = build_tree(solution.roots(), table.reduced());

        info!(
            keys = tree.len(),
            height = tree.height(),
            expected_cost = solution.expected_cost(),
            "built optimal search tree"
        );

        Ok(Self {
            probabilities,
            solution,
            tree,
        })
    }

    /// Load a dictionary file and build its index.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &ObstConfig) -> Result<Self, ObstError> {
        let table = FrequencyTable::from_path(path, &config.loader_options())?;
        Self::build(&table, config)
    }

    /// Look up a word.
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        search(&self.tree, query)
    }

    /// Minimum expected comparison cost.
    pub fn expected_cost(&self) -> f64 {
        self.solution.expected_cost()
    }

    /// Derived probabilities.
    pub fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    /// Solver tables.
    pub fn solution(&self) -> &ObstSolution {
        &self.solution
    }

    /// The built tree.
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }
}
