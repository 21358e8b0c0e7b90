use std::fmt;

/// A single `frequency word` record from a frequency dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct KeyRecord {
    /// Number of times the word was observed.
    pub frequency: u64,
    /// The word itself, used as the search key.
    pub word: String,
}

impl KeyRecord {
    /// Construct a new record.
    pub fn new(frequency: u64, word: impl Into<String>) -> Self {
        Self {
            frequency,
            word: word.into(),
        }
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.frequency, self.word)
    }
}
