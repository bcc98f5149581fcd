//! IPA tokenizer.
//!
//! Splits a transcription into atomic tokens: syllable marks, length marks
//! and phone symbols (with any trailing diacritics attached). Unknown
//! characters are dropped; `Tokenizer::tokenize_report` tells callers which
//! ones.

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::symbols::{self, LEGACY_LENGTH_MARK, LENGTH_MARK, SOUNDS, TIE, TIE_BELOW};
use crate::trie::SymbolTrie;
use crate::utils;
use crate::Config;

static STANDARD: Lazy<Tokenizer> = Lazy::new(Tokenizer::new);

/// Tokens produced for one transcription together with the characters that
/// were not recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenization {
    pub tokens: Vec<String>,
    pub dropped: Vec<char>,
}

/// Greedy longest-match tokenizer over a symbol trie.
#[derive(Debug)]
pub struct Tokenizer {
    trie: SymbolTrie,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Tokenizer over the built-in `SOUNDS` table.
    pub fn new() -> Self {
        Self::with_symbols::<&str>(&[])
    }

    /// Tokenizer over `SOUNDS` plus `extra` symbols.
    pub fn with_symbols<S: AsRef<str>>(extra: &[S]) -> Self {
        let mut trie = SymbolTrie::new();
        for symbol in SOUNDS {
            trie.insert(&utils::normalize(symbol));
        }
        for symbol in extra {
            trie.insert(&utils::normalize(symbol.as_ref()));
        }
        Self { trie }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::with_symbols(&cfg.extra_symbols)
    }

    /// Shared tokenizer over the built-in tables.
    pub fn standard() -> &'static Tokenizer {
        &STANDARD
    }

    /// Tokenize `ipa`, silently dropping unknown characters.
    ///
    /// # Example
    /// ```
    /// use minpair_core::Tokenizer;
    ///
    /// let tokens = Tokenizer::standard().tokenize("/barˈba:z/");
    /// assert_eq!(tokens, ["b", "a", "r", "ˈ", "b", "a", "ː", "z"]);
    /// ```
    pub fn tokenize(&self, ipa: &str) -> Vec<String> {
        self.tokenize_report(ipa).tokens
    }

    /// Tokenize `ipa`, failing when a non-empty transcription yields nothing.
    pub fn try_tokenize(&self, ipa: &str) -> Result<Vec<String>> {
        let report = self.tokenize_report(ipa);
        if report.tokens.is_empty() && !strip_delimiters(ipa).is_empty() {
            return Err(Error::MalformedTranscription {
                ipa: ipa.to_string(),
            });
        }
        Ok(report.tokens)
    }

    /// Tokenize `ipa` and report the characters that were dropped.
    pub fn tokenize_report(&self, ipa: &str) -> Tokenization {
        let chars: Vec<char> = prepare(ipa).chars().collect();
        let mut out = Tokenization::default();

        let mut pos = 0;
        while pos < chars.len() {
            let c = chars[pos];
            if symbols::is_syllable_mark(c) || symbols::is_length_mark(c) {
                out.tokens.push(c.to_string());
                pos += 1;
                continue;
            }

            let Some((end, base)) = self.match_symbol(&chars, pos) else {
                out.dropped.push(c);
                pos += 1;
                continue;
            };
            let mut symbol = symbols::normalize_transliteration(&base);
            pos = end;

            // A tie bar joins the next symbol even if the pair is not listed.
            if pos + 1 < chars.len() && chars[pos] == TIE {
                if let Some((end, next)) = self.match_symbol(&chars, pos + 1) {
                    symbol.push(TIE);
                    symbol.push_str(&next);
                    symbol = symbols::normalize_transliteration(&symbol);
                    pos = end;
                }
            }

            while pos < chars.len() && symbols::is_diacritic(chars[pos]) {
                symbol.push(chars[pos]);
                pos += 1;
            }

            out.tokens.push(symbol);
        }

        if !out.dropped.is_empty() {
            tracing::debug!(ipa, dropped = ?out.dropped, "dropped unknown IPA characters");
        }
        out
    }

    /// Longest known symbol at `pos`, else a single ASCII lowercase letter.
    fn match_symbol(&self, chars: &[char], pos: usize) -> Option<(usize, String)> {
        if let Some((end, symbol)) = self.trie.longest_match(chars, pos) {
            return Some((end, symbol.to_string()));
        }
        let c = *chars.get(pos)?;
        if c.is_ascii_lowercase() {
            Some((pos + 1, c.to_string()))
        } else {
            None
        }
    }
}

/// Tokenize with the standard tables.
pub fn tokenize(ipa: &str) -> Vec<String> {
    Tokenizer::standard().tokenize(ipa)
}

/// Remove enclosing transcription delimiters: `/…/`, `[…]` and `(…)`.
pub fn strip_delimiters(ipa: &str) -> &str {
    let trimmed = ipa
        .trim()
        .trim_start_matches(|c: char| c == '/' || c == '[')
        .trim_end_matches(|c: char| c == '/' || c == ']')
        .trim();
    match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// Canonical form a transcription is tokenized from.
///
/// Decomposes, strips delimiters and replaces the legacy length and tie
/// characters with their IPA counterparts.
pub fn prepare(ipa: &str) -> String {
    let normalized = utils::normalize(ipa);
    strip_delimiters(&normalized)
        .chars()
        .map(|c| match c {
            LEGACY_LENGTH_MARK => LENGTH_MARK,
            TIE_BELOW => TIE,
            other => other,
        })
        .collect()
}

pub fn is_syllable_mark_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if symbols::is_syllable_mark(c))
}

pub fn is_length_mark_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if symbols::is_length_mark(c))
}

/// The phone symbols of a token sequence.
///
/// Syllable and length marks are skipped, as is a token repeating the
/// previous phone of the same syllable (doubled-letter length notation), so
/// the result lines up one-to-one with the phones the parser builds.
pub fn phone_symbols<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut out = Vec::new();
    let mut last_phone: Option<&str> = None;
    for token in tokens {
        let token = token.as_ref();
        if is_syllable_mark_token(token) {
            last_phone = None;
            continue;
        }
        if is_length_mark_token(token) || last_phone == Some(token) {
            continue;
        }
        last_phone = Some(token);
        out.push(token.to_string());
    }
    out
}
