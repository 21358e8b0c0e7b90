//! Access probabilities for the reduced key set.
//!
//! `p[i]` is the chance a lookup hits reduced key `i`; `q[i]` is the chance it
//! lands in the gap after reduced key `i` (`q[0]` before the first key). Gap
//! mass is the frequency of every full-list key that falls between two
//! consecutive reduced keys.

use std::collections::HashMap;

use thiserror::Error;

use crate::dictionary::KeyRecord;

/// How the mass in front of the first reduced key is accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum GapAccounting {
    /// Sum the frequencies of the preceding keys.
    #[default]
    Frequency,

    /// Sum the positional indices `0..k` of the `k` preceding keys.
    ///
    /// Kept for comparing against tables dumped with positional `q[0]`.
    /// Every other gap is computed from frequencies in both modes.
    LegacyPositional,
}

/// Errors raised while deriving probabilities.
#[derive(Debug, Error, PartialEq)]
pub enum ProbabilityError {
    /// No key met the inclusion threshold.
    #[error("reduced key set is empty")]
    EmptyReducedSet,

    /// Normalizing by a zero total is meaningless.
    #[error("total frequency is zero")]
    ZeroFrequencySum,

    /// A reduced key has no matching record in the full list.
    #[error("reduced key '{0}' not found in the full key list")]
    MissingKey(String),

    /// Frequencies in one gap summed past `u64::MAX`.
    #[error("frequency sum overflowed in gap {gap}")]
    FrequencyOverflow {
        /// Index `k` of the overflowing `q[k]`.
        gap: usize,
    },

    /// Reduced keys appear out of order relative to the full list.
    #[error("reduced key '{word}' at full position {position} does not follow the previous reduced key")]
    NotSubsequence {
        /// Offending word.
        word: String,
        /// Its position in the full list.
        position: usize,
    },
}

/// Match and gap probability vectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Probabilities {
    p: Vec<f64>,
    q: Vec<f64>,
}

impl Probabilities {
    /// Wrap precomputed vectors (`q.len()` should be `p.len() + 1`).
    pub fn from_vectors(p: Vec<f64>, q: Vec<f64>) -> Self {
        Self { p, q }
    }

    /// Match probabilities; `p()[k]` belongs to reduced key `k + 1`.
    pub fn p(&self) -> &[f64] {
        &self.p
    }

    /// Gap probabilities `q[0..=n]`.
    pub fn q(&self) -> &[f64] {
        &self.q
    }

    /// Number of reduced keys.
    pub fn n(&self) -> usize {
        self.p.len()
    }

    /// `sum(p) + sum(q)`; 1.0 when the frequency sum covers the full list.
    pub fn total_mass(&self) -> f64 {
        self.p.iter().chain(self.q.iter()).sum()
    }
}

/// Derive `p` and `q` with frequency-based gap accounting.
pub fn build_probabilities(
    full: &[KeyRecord],
    reduced: &[KeyRecord],
    freq_sum: u64,
) -> Result<Probabilities, ProbabilityError> {
    build_probabilities_with(full, reduced, freq_sum, GapAccounting::Frequency)
}

/// Derive `p` and `q`, choosing how the leading gap is accounted.
pub fn build_probabilities_with(
    full: &[KeyRecord],
    reduced: &[KeyRecord],
    freq_sum: u64,
    accounting: GapAccounting,
) -> Result<Probabilities, ProbabilityError> {
    if reduced.is_empty() {
        return Err(ProbabilityError::EmptyReducedSet);
    }
    if freq_sum == 0 {
        return Err(ProbabilityError::ZeroFrequencySum);
    }

    let positions = locate(full, reduced)?;
    let total = freq_sum as f64;

    let p = reduced
        .iter()
        .map(|record| record.frequency as f64 / total)
        .collect();

    let mut q = Vec::with_capacity(reduced.len() + 1);

    let first = positions[0];
    let leading = match accounting {
        GapAccounting::Frequency => gap_mass(&full[..first], 0)?,
        // 0 + 1 + .. + (first - 1)
        GapAccounting::LegacyPositional => {
            let k = first as u128;
            u64::try_from(k * k.saturating_sub(1) / 2)
                .map_err(|_| ProbabilityError::FrequencyOverflow { gap: 0 })?
        }
    };
    q.push(leading as f64 / total);

    for (k, &pos) in positions.iter().enumerate() {
        let end = positions.get(k + 1).copied().unwrap_or(full.len());
        q.push(gap_mass(&full[pos + 1..end], k + 1)? as f64 / total);
    }

    Ok(Probabilities { p, q })
}

fn gap_mass(records: &[KeyRecord], gap: usize) -> Result<u64, ProbabilityError> {
    records.iter().try_fold(0u64, |sum, record| {
        sum.checked_add(record.frequency)
            .ok_or(ProbabilityError::FrequencyOverflow { gap })
    })
}

/// Map every reduced key to its full-list position using a one-pass index.
fn locate(full: &[KeyRecord], reduced: &[KeyRecord]) -> Result<Vec<usize>, ProbabilityError> {
    let mut index: HashMap<(&str, u64), usize> = HashMap::with_capacity(full.len());
    for (pos, record) in full.iter().enumerate() {
        index
            .entry((record.word.as_str(), record.frequency))
            .or_insert(pos);
    }

    let mut positions = Vec::with_capacity(reduced.len());
    for record in reduced {
        let pos = *index
            .get(&(record.word.as_str(), record.frequency))
            .ok_or_else(|| ProbabilityError::MissingKey(record.word.clone()))?;

        if let Some(&prev) = positions.last() {
            if pos <= prev {
                return Err(ProbabilityError::NotSubsequence {
                    word: record.word.clone(),
                    position: pos,
                });
            }
        }
        positions.push(pos);
    }

    Ok(positions)
}
