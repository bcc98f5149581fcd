// core/tests/filter_files.rs
//
// File-backed tests for filter groups, configuration and word records.

use std::io::Write;

use minpair_core::filter::{format_filter_groups, load_filter_groups};
use minpair_core::records::{read_records, words_from_records};
use minpair_core::symbols::CONFUSABLE_GROUPS;
use minpair_core::{Config, Contrast, Error, FilterPairs, Generator, Tokenizer, Word};
use tempfile::NamedTempFile;

fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn filter_file_replaces_pairs() {
    let file = write_temp("# custom\nr, m\n", ".txt");
    let mut generator = Generator::new(&Config::default());
    generator.set_filter_pairs_from_file(file.path()).unwrap();

    let words = vec![Word::new("bar", "/bar/"), Word::new("bam", "/bam/"), Word::new("baf", "/baf/")];
    let pairs = generator.generate(&words);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].last.text(), "bam");
    assert_eq!(pairs[0].contrast, Contrast::Phoneme);
}

#[test]
fn failed_load_keeps_previous_filter() {
    let mut generator = Generator::new(&Config::default());
    let before = generator.classifier().filter_pairs().clone();

    let bad = write_temp("v, f\nonly-one\n", ".txt");
    let err = generator.set_filter_pairs_from_file(bad.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidFilterFile { line: 2, .. }));
    assert_eq!(generator.classifier().filter_pairs(), &before);

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let err = generator.set_filter_pairs_from_file(&missing).unwrap_err();
    assert!(matches!(err, Error::FilterFileUnreadable { .. }));
    assert_eq!(generator.classifier().filter_pairs(), &before);
}

#[test]
fn default_groups_template_loads_back() {
    let file = write_temp(&format_filter_groups(CONFUSABLE_GROUPS), ".txt");
    let groups = load_filter_groups(file.path()).unwrap();
    assert_eq!(groups.len(), CONFUSABLE_GROUPS.len());
    assert_eq!(FilterPairs::from_groups(&groups), FilterPairs::standard());
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minpair.toml");
    let cfg = Config {
        optimise: false,
        keep_stress: false,
        extra_symbols: vec!["ǂ".to_string()],
        ..Config::default()
    };
    cfg.save_toml(&path).unwrap();
    assert_eq!(Config::load_toml(&path).unwrap(), cfg);
}

#[test]
fn invalid_config_is_an_error() {
    let file = write_temp("optimise = \"yes\"\n", ".toml");
    assert!(matches!(Config::load_toml(file.path()), Err(Error::Toml(_))));
}

#[test]
fn records_from_tsv_and_json_files() {
    let tsv = write_temp("vat\t/vat/\nfat\t/fat/\nat\t-at\n", ".tsv");
    let json = write_temp(
        r#"[{"text":"vat","ipa":"/vat/"},{"text":"fat","ipa":"/fat/"},{"text":"x","ipa":""}]"#,
        ".json",
    );

    let from_tsv = words_from_records(read_records(tsv.path()).unwrap(), Tokenizer::standard());
    let from_json = words_from_records(read_records(json.path()).unwrap(), Tokenizer::standard());
    assert_eq!(from_tsv, from_json);
    assert_eq!(from_tsv.len(), 2);

    let pairs = Generator::new(&Config::default()).generate(&from_tsv);
    assert_eq!(pairs.len(), 1);
}

#[test]
fn extra_symbols_reach_the_tokenizer() {
    let cfg = Config {
        optimise: false,
        extra_symbols: vec!["ǀ".to_string(), "ǃ".to_string()],
        ..Config::default()
    };
    let tokenizer = Tokenizer::from_config(&cfg);
    let a = Word::with_tokenizer("a", "/ǀa/", &tokenizer);
    let b = Word::with_tokenizer("b", "/ǃa/", &tokenizer);
    assert_eq!(Generator::new(&cfg).generate(&[a, b]).len(), 1);
}
