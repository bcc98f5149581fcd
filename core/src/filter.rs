//! Confusable symbol pairs for the phoneme-contrast optimisation filter.
//!
//! A filter file holds one confusable group per line, symbols separated by
//! commas:
//!
//! ```text
//! # sibilants
//! s, ʃ, ɕ
//! v, f
//! ```
//!
//! Whitespace is ignored, as are blank lines and `#` comments. Every
//! 2-combination inside a group becomes a pair.
use std::path::Path;

use ahash::AHashSet;

use crate::error::{Error, Result};
use crate::symbols::{self, CONFUSABLE_GROUPS, LEGACY_LENGTH_MARK, LENGTH_MARK, TIE, TIE_BELOW};
use crate::utils;

/// Unordered symbol pairs, stored as `(min, max)` so lookups ignore order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPairs {
    pairs: AHashSet<(String, String)>,
}

impl FilterPairs {
    pub fn new() -> Self {
        Self {
            pairs: AHashSet::new(),
        }
    }

    /// Build pairs from confusable groups.
    pub fn from_groups<S: AsRef<str>, G: AsRef<[S]>>(groups: &[G]) -> Self {
        let mut out = Self::new();
        for group in groups {
            let symbols: Vec<String> = group
                .as_ref()
                .iter()
                .map(|s| normalize_symbol(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect();
            for (i, a) in symbols.iter().enumerate() {
                for b in &symbols[i + 1..] {
                    out.add_pair(a, b);
                }
            }
        }
        out
    }

    /// Pairs built from the built-in `CONFUSABLE_GROUPS`.
    pub fn standard() -> Self {
        Self::from_groups(CONFUSABLE_GROUPS)
    }

    /// Load pairs from a filter file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let groups = load_filter_groups(path)?;
        Ok(Self::from_groups(&groups))
    }

    /// Add a pair. Identical symbols are ignored.
    pub fn add_pair(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        self.pairs.insert(canonical(a, b))
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.pairs.contains(&(lo.to_string(), hi.to_string()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs, sorted.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .pairs
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        out.sort_unstable();
        out
    }

    pub fn extend(&mut self, other: &FilterPairs) {
        for (a, b) in &other.pairs {
            self.pairs.insert((a.clone(), b.clone()));
        }
    }
}

fn canonical(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// All 2-combinations of each group, unioned across groups.
///
/// # Example
/// ```
/// use minpair_core::build_filter_pairs;
///
/// let pairs = build_filter_pairs(&[["a", "e", "o"]]);
/// assert_eq!(pairs.len(), 3);
/// assert!(pairs.contains("e", "a"));
/// assert!(!pairs.contains("a", "i"));
/// ```
pub fn build_filter_pairs<S: AsRef<str>, G: AsRef<[S]>>(groups: &[G]) -> FilterPairs {
    FilterPairs::from_groups(groups)
}

/// Put a filter symbol in the form the tokenizer produces.
///
/// Length marks are removed: the filter compares symbols only. Trailing
/// diacritics are split off while the base is normalised, so `tʃʰ` becomes
/// `t͡ʃʰ` as it does in the tokenizer.
pub fn normalize_symbol(symbol: &str) -> String {
    let stripped: String = utils::normalize(symbol)
        .chars()
        .map(|c| if c == TIE_BELOW { TIE } else { c })
        .filter(|c| !c.is_whitespace() && *c != LENGTH_MARK && *c != LEGACY_LENGTH_MARK)
        .collect();
    let base = stripped.trim_end_matches(|c: char| symbols::is_diacritic(c));
    let mut out = symbols::normalize_transliteration(base);
    out.push_str(&stripped[base.len()..]);
    out
}

/// Parse the contents of a filter file into groups.
///
/// Lines with an empty field, or with fewer than two distinct symbols, are
/// rejected with their 1-based line number.
pub fn parse_filter_groups(content: &str) -> Result<Vec<Vec<String>>> {
    let mut groups = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let invalid = |reason: &str| Error::InvalidFilterFile {
            line: idx + 1,
            content: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut group: Vec<String> = Vec::new();
        for field in line.split(',') {
            let symbol = normalize_symbol(field);
            if symbol.is_empty() {
                return Err(invalid("empty symbol"));
            }
            if !group.contains(&symbol) {
                group.push(symbol);
            }
        }
        if group.len() < 2 {
            return Err(invalid("a group needs at least two distinct symbols"));
        }
        groups.push(group);
    }
    Ok(groups)
}

/// Read and parse a filter file.
pub fn load_filter_groups<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::FilterFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let groups = parse_filter_groups(&content)?;
    tracing::debug!(path = %path.display(), groups = groups.len(), "loaded filter groups");
    Ok(groups)
}

/// Write groups back in the filter file format, one group per line.
pub fn format_filter_groups<S: AsRef<str>, G: AsRef<[S]>>(groups: &[G]) -> String {
    let mut out = String::new();
    for group in groups {
        let symbols: Vec<&str> = group.as_ref().iter().map(|s| s.as_ref()).collect();
        out.push_str(&symbols.join(", "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_from_one_group() {
        let pairs = build_filter_pairs(&[["a", "e", "o"]]);
        assert_eq!(pairs.pairs(), vec![("a", "e"), ("a", "o"), ("e", "o")]);
    }

    #[test]
    fn lookup_is_order_independent() {
        let pairs = build_filter_pairs(&[vec!["v", "f"]]);
        assert!(pairs.contains("v", "f"));
        assert!(pairs.contains("f", "v"));
        assert!(!pairs.contains("v", "v"));
        assert!(!pairs.contains("v", "z"));
    }

    #[test]
    fn groups_union_without_duplicates() {
        let pairs = build_filter_pairs(&[vec!["a", "e"], vec!["e", "a", "i"]]);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn standard_pairs_use_tokenizer_spelling() {
        let pairs = FilterPairs::standard();
        assert!(pairs.contains("t\u{0361}ʃ", "ʃ"));
        // ś is stored decomposed, as the tokenizer emits it.
        assert!(pairs.contains("s\u{0301}", "s"));
        assert!(pairs.contains("ɛ\u{0303}", "ɛ"));
    }

    #[test]
    fn standard_pairs_do_not_cross_vowel_groups() {
        let pairs = FilterPairs::standard();
        assert!(!pairs.contains("ɑ", "u"));
        assert!(!pairs.contains("ɔ", "ɛ"));
        assert!(!pairs.contains("u", "ɪ"));
        assert!(pairs.contains("ʊ", "u"));
    }

    #[test]
    fn parses_groups_ignoring_whitespace_and_comments() {
        let content = "# sibilants\n s , ʃ,ɕ \n\n v,f\n";
        let groups = parse_filter_groups(content).unwrap();
        assert_eq!(groups, vec![vec!["s", "ʃ", "ɕ"], vec!["v", "f"]]);
    }

    #[test]
    fn symbols_are_normalized() {
        let groups = parse_filter_groups("tʃ, ʃ\na:, aː, e\n").unwrap();
        assert_eq!(groups[0], vec!["t\u{0361}ʃ", "ʃ"]);
        assert_eq!(groups[1], vec!["a", "e"]);
    }

    #[test]
    fn affricate_with_diacritic_matches_tokenizer_output() {
        let groups = parse_filter_groups("tʃʰ, ʃʰ\nʧʷ, t\u{035C}sʷ\n").unwrap();
        let tokens = crate::tokenizer::tokenize("/tʃʰa/");
        assert_eq!(groups[0][0], tokens[0]);
        assert_eq!(groups[0], vec!["t\u{0361}ʃʰ", "ʃʰ"]);
        assert_eq!(groups[1], vec!["t\u{0361}ʃʷ", "t\u{0361}sʷ"]);
    }

    #[test]
    fn rejects_empty_field_with_line_number() {
        let err = parse_filter_groups("a, e\nb,,p\n").unwrap_err();
        match err {
            Error::InvalidFilterFile { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "b,,p");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_single_symbol_group() {
        let err = parse_filter_groups("a\n").unwrap_err();
        assert!(matches!(err, Error::InvalidFilterFile { line: 1, .. }));

        let err = parse_filter_groups("a, a:\n").unwrap_err();
        assert!(matches!(err, Error::InvalidFilterFile { line: 1, .. }));
    }

    #[test]
    fn format_round_trips_through_parse() {
        let groups = vec![vec!["s".to_string(), "ʃ".to_string()], vec!["v".into(), "f".into()]];
        let text = format_filter_groups(&groups);
        assert_eq!(text, "s, ʃ\nv, f\n");
        assert_eq!(parse_filter_groups(&text).unwrap(), groups);
    }

    #[test]
    fn extend_merges_sets() {
        let mut a = build_filter_pairs(&[["a", "e"]]);
        let b = build_filter_pairs(&[["i", "e"]]);
        a.extend(&b);
        assert_eq!(a.len(), 2);
        assert!(a.contains("e", "i"));
    }
}
