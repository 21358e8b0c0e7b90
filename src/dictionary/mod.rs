//! Frequency dictionary loading.
//!
//! A dictionary is a flat text file of `frequency word` lines. Loading yields
//! the full key list and the reduced list of keys frequent enough to become
//! tree nodes, both sorted by word, plus the total frequency.

mod io;
mod types;

pub use io::{parse_line, LoadError};
pub use types::KeyRecord;

/// Minimum frequency for a key to enter the reduced set.
pub const DEFAULT_THRESHOLD: u64 = 50_000;

/// Options controlling how a dictionary is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Keys with `frequency >= threshold` are kept in the reduced list.
    pub threshold: u64,

    /// Abort on the first malformed record instead of skipping it.
    pub strict: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strict: true,
        }
    }
}

/// Loaded dictionary: full and reduced key lists, sorted by word.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct FrequencyTable {
    full: Vec<KeyRecord>,
    reduced: Vec<KeyRecord>,
    freq_sum: u64,
}

impl FrequencyTable {
    /// Build a table from records in any order.
    ///
    /// Sorting is stable, so records sharing a word keep their input order.
    pub fn from_records(records: Vec<KeyRecord>, threshold: u64) -> Result<Self, LoadError> {
        let mut freq_sum = 0u64;
        for (idx, record) in records.iter().enumerate() {
            freq_sum = freq_sum
                .checked_add(record.frequency)
                .ok_or(LoadError::FrequencyOverflow { record: idx + 1 })?;
        }

        let mut full = records;
        full.sort_by(|a, b| a.word.cmp(&b.word));

        let reduced = full
            .iter()
            .filter(|record| record.frequency >= threshold)
            .cloned()
            .collect();

        Ok(Self {
            full,
            reduced,
            freq_sum,
        })
    }

    /// Every loaded key, sorted by word.
    pub fn full(&self) -> &[KeyRecord] {
        &self.full
    }

    /// Keys meeting the threshold, sorted by word.
    pub fn reduced(&self) -> &[KeyRecord] {
        &self.reduced
    }

    /// Sum of all frequencies in the full list.
    pub fn freq_sum(&self) -> u64 {
        self.freq_sum
    }
}
