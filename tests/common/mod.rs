#![allow(dead_code)]

use obst::{FrequencyTable, KeyRecord, ObstConfig, OptimalSearchIndex};

/// Dictionary text around three frequent fruits.
pub const FRUIT_DICTIONARY: &str = "\
70000 cherry
10 aardvark
55000 banana
30 date
60000 apple
5 avocado
20 blueberry
";

/// Total of every frequency in [`FRUIT_DICTIONARY`].
pub const FRUIT_FREQ_SUM: u64 = 185_065;

pub fn fruit_table() -> FrequencyTable {
    FrequencyTable::from_reader(FRUIT_DICTIONARY.as_bytes(), &Default::default())
        .expect("fruit dictionary parses")
}

pub fn fruit_index() -> OptimalSearchIndex {
    OptimalSearchIndex::build(&fruit_table(), &ObstConfig::default()).expect("fruit index builds")
}

/// Records whose frequencies are all above `threshold`, words `w000`, `w001`, ...
pub fn numbered_records(frequencies: &[u64]) -> Vec<KeyRecord> {
    frequencies
        .iter()
        .enumerate()
        .map(|(idx, &freq)| KeyRecord::new(freq, format!("w{idx:03}")))
        .collect()
}
