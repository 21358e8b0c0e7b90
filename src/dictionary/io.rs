use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::{FrequencyTable, KeyRecord, LoaderOptions};

/// Errors raised while reading a frequency dictionary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dictionary file could not be opened or read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from a non-file source failed.
    #[error("read failed at line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    InvalidEncoding {
        /// 1-based line number.
        line: usize,
    },

    /// A record is missing its word after the frequency.
    #[error("missing word on line {line}")]
    MissingWord {
        /// 1-based line number.
        line: usize,
    },

    /// The frequency column is not a non-negative integer.
    #[error("invalid frequency '{value}' on line {line}: {source}")]
    InvalidFrequency {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        value: String,
        /// Parser failure.
        #[source]
        source: ParseIntError,
    },

    /// Frequencies summed past `u64::MAX`.
    #[error("frequency sum overflowed at record {record}")]
    FrequencyOverflow {
        /// 1-based position of the record that overflowed.
        record: usize,
    },
}

/// Parse one `frequency word` line.
///
/// Blank lines yield `Ok(None)`. Tokens after the word are ignored.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<KeyRecord>, LoadError> {
    let mut fields = line.split_whitespace();
    let Some(freq_str) = fields.next() else {
        return Ok(None);
    };
    let word = fields
        .next()
        .ok_or(LoadError::MissingWord { line: line_no })?;

    let frequency = freq_str
        .parse::<u64>()
        .map_err(|source| LoadError::InvalidFrequency {
            line: line_no,
            value: freq_str.to_string(),
            source,
        })?;

    Ok(Some(KeyRecord::new(frequency, word)))
}

impl FrequencyTable {
    /// Load a dictionary from any buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R, options: &LoaderOptions) -> Result<Self, LoadError> {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::Read {
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let parsed = std::str::from_utf8(&buf)
                .map_err(|_| LoadError::InvalidEncoding { line: line_no })
                .and_then(|line| parse_line(line, line_no));

            match parsed {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(err) if !options.strict => {
                    warn!(line = line_no, error = %err, "skipping malformed record");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        let table = Self::from_records(records, options.threshold)?;
        info!(
            keys = table.full().len(),
            reduced = table.reduced().len(),
            freq_sum = table.freq_sum(),
            skipped,
            "loaded frequency dictionary"
        );
        Ok(table)
    }

    /// Load a dictionary from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoaderOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frequency_and_word() {
        let record = parse_line("60000 apple", 1).unwrap().unwrap();
        assert_eq!(record, KeyRecord::new(60000, "apple"));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let record = parse_line("  7\tpear trailing junk", 3).unwrap().unwrap();
        assert_eq!(record, KeyRecord::new(7, "pear"));
    }

    #[test]
    fn blank_line_is_not_a_record() {
        assert!(parse_line("   ", 2).unwrap().is_none());
    }

    #[test]
    fn lenient_mode_skips_bad_lines() {
        let input = "10 a\nnope b\n20\n30 c\n";
        let options = LoaderOptions {
            strict: false,
            ..LoaderOptions::default()
        };
        let table = FrequencyTable::from_reader(input.as_bytes(), &options).unwrap();
        assert_eq!(table.full().len(), 2);
        assert_eq!(table.freq_sum(), 40);
    }

    #[test]
    fn lenient_mode_skips_undecodable_lines() {
        let input: &[u8] = b"60000 apple\n70 \xe8aj\n55000 banana\n";
        let options = LoaderOptions {
            strict: false,
            ..LoaderOptions::default()
        };
        let table = FrequencyTable::from_reader(input, &options).unwrap();
        let words: Vec<&str> = table.full().iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["apple", "banana"]);
        assert_eq!(table.freq_sum(), 115_000);
    }

    #[test]
    fn strict_mode_rejects_undecodable_lines() {
        let input: &[u8] = b"60000 apple\n70 \xe8aj\n";
        let err = FrequencyTable::from_reader(input, &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidEncoding { line: 2 }));
    }

    #[test]
    fn strict_mode_reports_line_number() {
        let input = "10 a\n20\n";
        let err = FrequencyTable::from_reader(input.as_bytes(), &LoaderOptions::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingWord { line: 2 }));
    }
}
