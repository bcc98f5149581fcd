//! minpair-core
//!
//! Minimal-pair discovery over IPA transcriptions: tokenizer, phonological
//! parser, contrast classifier and the all-pairs generator, plus the
//! configuration and record formats shared by front-ends.
//!
//! Public API:
//! - `Tokenizer` - IPA string to atomic tokens
//! - `Syllable` / `Phone` / `Stress` - parsed phonology
//! - `Word` / `WordPair` - words and the minimal pairs found between them
//! - `Classifier` - phoneme / chroneme / stress contrast detection
//! - `Generator` - quadratic search over a word list
//! - `FilterPairs` - confusable symbol pairs for the optimisation filter
//! - `Config` - configuration and feature flags
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod symbols;

pub mod trie;
pub use trie::SymbolTrie;

pub mod tokenizer;
pub use tokenizer::{tokenize, Tokenization, Tokenizer};

pub mod phonology;
pub use phonology::{Phone, Stress, Syllable};

pub mod word;
pub use word::{MinPairRecord, Word, WordPair, WordRecord};

pub mod filter;
pub use filter::{build_filter_pairs, FilterPairs};

pub mod classifier;
pub use classifier::{Classifier, Contrast, Difference};

pub mod generator;
pub use generator::{comparison_count, Generator};

pub mod records;
pub use records::RecordFormat;

/// Options controlling which minimal pairs are kept.
///
/// Every field has a default, so a TOML file only needs to name the options
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Keep only phoneme contrasts whose two phones form a filter pair.
    pub optimise: bool,

    pub keep_phonemes: bool,
    pub keep_chronemes: bool,
    pub keep_stress: bool,

    /// Confusable groups replacing the built-in ones.
    /// `None` uses `symbols::CONFUSABLE_GROUPS`.
    pub filter_groups: Option<Vec<Vec<String>>>,

    /// Symbols the tokenizer should treat as single units in addition to
    /// the built-in table (e.g. clicks).
    pub extra_symbols: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            optimise: true,
            keep_phonemes: true,
            keep_chronemes: true,
            keep_stress: true,
            filter_groups: None,
            extra_symbols: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Fails when no contrast kind is enabled.
    pub fn validate(&self) -> Result<()> {
        if !self.keeps_any() {
            return Err(Error::ConfigurationConflict);
        }
        Ok(())
    }

    pub fn keeps_any(&self) -> bool {
        self.keep_phonemes || self.keep_chronemes || self.keep_stress
    }

    /// Filter pairs for this configuration: the configured groups if any,
    /// otherwise the built-in ones.
    pub fn filter_pairs(&self) -> FilterPairs {
        match &self.filter_groups {
            Some(groups) => FilterPairs::from_groups(groups),
            None => FilterPairs::standard(),
        }
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFD) and trim whitespace.
    ///
    /// Decomposed form keeps base letters and combining marks apart, which is
    /// what the tokenizer's diacritic handling expects.
    pub fn normalize(s: &str) -> String {
        s.nfd().collect::<String>().trim().to_string()
    }
}
