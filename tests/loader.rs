use obst::dictionary::parse_line;
use obst::{FrequencyTable, KeyRecord, LoadError, LoaderOptions};
use test_case::test_case;

mod common;

#[test_case("12 word", 12, "word" ; "plain record")]
#[test_case("\t0   zero  ", 0, "zero" ; "surrounding whitespace")]
#[test_case("5 a b c", 5, "a" ; "extra columns")]
fn parses_valid_lines(line: &str, frequency: u64, word: &str) {
    let record = parse_line(line, 1).unwrap().unwrap();
    assert_eq!(record, KeyRecord::new(frequency, word));
}

#[test_case("42" ; "missing word")]
#[test_case("abc word" ; "non numeric frequency")]
#[test_case("-3 word" ; "negative frequency")]
#[test_case("1.5 word" ; "fractional frequency")]
fn rejects_malformed_lines(line: &str) {
    let err = parse_line(line, 7).unwrap_err();
    match err {
        LoadError::MissingWord { line } | LoadError::InvalidFrequency { line, .. } => {
            assert_eq!(line, 7)
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn fruit_dictionary_sorted_by_word() {
    let table = common::fruit_table();
    let words: Vec<&str> = table.full().iter().map(|r| r.word.as_str()).collect();

    assert_eq!(
        words,
        ["aardvark", "apple", "avocado", "banana", "blueberry", "cherry", "date"]
    );
    assert_eq!(table.freq_sum(), common::FRUIT_FREQ_SUM);
    assert_eq!(table.reduced().len(), 3);
}

#[test]
fn threshold_is_inclusive() {
    let options = LoaderOptions {
        threshold: 55_000,
        ..LoaderOptions::default()
    };
    let table = FrequencyTable::from_reader(common::FRUIT_DICTIONARY.as_bytes(), &options).unwrap();
    let words: Vec<&str> = table.reduced().iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, ["apple", "banana", "cherry"]);
}

#[test]
fn missing_file_reports_path() {
    let err = FrequencyTable::from_path("/nonexistent/dictionary.txt", &LoaderOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/dictionary.txt"));
}
