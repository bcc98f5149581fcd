// minpair/tests/commands.rs
//
// Tests for the command helpers used by the `minpair` binary.

use std::io::Write;

use minpair::{analyse, analyse_json, check, filters_template, load_words, write_pairs, ContrastArgs};
use minpair_core::filter::parse_filter_groups;
use minpair_core::records::RecordFormat;
use minpair_core::{Classifier, Config, Contrast, Tokenizer};

fn temp_file(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn unfiltered() -> Classifier {
    Classifier::new(&Config {
        optimise: false,
        ..Config::default()
    })
}

#[test]
fn analyse_lists_tokens_and_syllables() {
    let out = analyse(Tokenizer::standard(), &["/barˈbaz/"]);
    assert_eq!(
        out,
        "ipa: /barˈbaz/\ntokens: b a r ˈ b a z\n\
         syllable 1 (unstressed): b a r\nsyllable 2 (primary stress): b a z"
    );
}

#[test]
fn analyse_reports_dropped_characters() {
    let out = analyse(Tokenizer::standard(), &["/a1/"]);
    assert!(out.contains("dropped: 1"));
}

#[test]
fn analyse_json_is_parseable() {
    let out = analyse_json(Tokenizer::standard(), &["/foː/"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["syllables"][0]["stress"], "unstressed");
    assert_eq!(value[0]["syllables"][0]["phones"][1]["long"], true);
}

#[test]
fn check_explains_contrast() {
    let out = check(&unfiltered(), Tokenizer::standard(), "/barˈbaz/", "/bar:ˈbaz/");
    assert_eq!(out, "/barˈbaz/ ~ /bar:ˈbaz/: chroneme contrast in syllable 1: bar / barː");

    let out = check(&unfiltered(), Tokenizer::standard(), "/bar/", "/pam/");
    assert!(out.ends_with("not a minimal pair"));
}

#[test]
fn check_reports_pairs_outside_confusable_groups() {
    let args = ContrastArgs::default();
    let cfg = args.check_config().unwrap();
    assert!(!cfg.optimise);

    let out = check(&Classifier::new(&cfg), Tokenizer::standard(), "/barˈbaz/", "/bamˈbaz/");
    assert_eq!(out, "/barˈbaz/ ~ /bamˈbaz/: phoneme contrast in syllable 1: r / m");

    // The generate path still filters the same pair out.
    let filtered = args.generator(&args.config().unwrap()).unwrap();
    let out = check(filtered.classifier(), Tokenizer::standard(), "/barˈbaz/", "/bamˈbaz/");
    assert!(out.ends_with("not a minimal pair"));
}

#[test]
fn flags_override_config_file() {
    let file = temp_file("optimise = true\nkeep_stress = true\n", ".toml");
    let args = ContrastArgs {
        config: Some(file.path().to_path_buf()),
        no_optimise: true,
        no_stress: true,
        ..ContrastArgs::default()
    };
    let cfg = args.config().unwrap();
    assert!(!cfg.optimise);
    assert!(!cfg.keep_stress);
    assert!(cfg.keep_phonemes);
}

#[test]
fn disabling_everything_is_rejected() {
    let args = ContrastArgs {
        no_phonemes: true,
        no_chronemes: true,
        no_stress: true,
        ..ContrastArgs::default()
    };
    assert!(args.config().is_err());
}

#[test]
fn bad_filter_file_falls_back_unless_strict() {
    let bad = temp_file("lonely\n", ".txt");
    let mut args = ContrastArgs {
        filter: Some(bad.path().to_path_buf()),
        ..ContrastArgs::default()
    };
    let cfg = args.config().unwrap();

    let generator = args.generator(&cfg).unwrap();
    assert_eq!(
        generator.classifier().filter_pairs(),
        &minpair_core::FilterPairs::standard()
    );

    args.strict_filter = true;
    assert!(args.generator(&cfg).is_err());
}

#[test]
fn generate_from_tsv_file() {
    let input = temp_file("vat\t/vat/\nfat\t/fat/\nbat\t/bat/\n", ".tsv");
    let words = load_words(input.path(), None, Tokenizer::standard()).unwrap();
    assert_eq!(words.len(), 3);

    let args = ContrastArgs::default();
    let cfg = args.config().unwrap();
    let pairs = minpair::generate(&args.generator(&cfg).unwrap(), &words);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].contrast, Contrast::Phoneme);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("pairs.tsv");
    assert!(write_pairs(&pairs, RecordFormat::Tsv, Some(&out)).unwrap().is_none());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "vat\tvat\tfat\tfat\tphoneme\n");
}

#[test]
fn empty_word_list_is_an_error() {
    let input = temp_file("[]", ".json");
    assert!(load_words(input.path(), None, Tokenizer::standard()).is_err());
}

#[test]
fn filters_template_parses() {
    let groups = parse_filter_groups(&filters_template()).unwrap();
    assert_eq!(groups.len(), minpair_core::symbols::CONFUSABLE_GROUPS.len());
}
