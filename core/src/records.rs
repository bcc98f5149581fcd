//! Word records in, minimal-pair records out.
//!
//! Input is either a JSON array of `{ "text", "ipa" }` objects or TSV with
//! one `text<TAB>ipa` record per line. Output is JSON (one object per pair)
//! or TSV (`first.text, first.ipa, last.text, last.ipa, contrast`).
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::tokenizer::{self, Tokenizer};
use crate::word::{MinPairRecord, Word, WordPair, WordRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFormat {
    #[default]
    Json,
    Tsv,
}

impl RecordFormat {
    /// Guess the format from a file extension; anything but `.tsv`/`.txt`
    /// is taken as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt") => {
                RecordFormat::Tsv
            }
            _ => RecordFormat::Json,
        }
    }

    pub fn parse_records(self, content: &str) -> Result<Vec<WordRecord>> {
        match self {
            RecordFormat::Json => parse_json_records(content),
            RecordFormat::Tsv => parse_tsv_records(content),
        }
    }

    pub fn format_pairs(self, pairs: &[WordPair]) -> Result<String> {
        match self {
            RecordFormat::Json => pairs_to_json(pairs),
            RecordFormat::Tsv => Ok(pairs_to_tsv(pairs)),
        }
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(RecordFormat::Json),
            "tsv" => Ok(RecordFormat::Tsv),
            other => Err(format!("unknown record format '{other}' (expected json or tsv)")),
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordFormat::Json => f.write_str("json"),
            RecordFormat::Tsv => f.write_str("tsv"),
        }
    }
}

pub fn parse_json_records(content: &str) -> Result<Vec<WordRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse `text<TAB>ipa` lines. Blank lines are skipped.
pub fn parse_tsv_records(content: &str) -> Result<Vec<WordRecord>> {
    let mut out = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((text, ipa)) = line.split_once('\t') else {
            return Err(Error::InvalidRecord {
                line: idx + 1,
                content: line.to_string(),
            });
        };
        out.push(WordRecord::new(text.trim(), ipa.trim()));
    }
    Ok(out)
}

/// Read records from a file, choosing the format from its extension.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<WordRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    RecordFormat::from_path(path).parse_records(&content)
}

/// Whether a record carries a usable pronunciation.
///
/// Empty transcriptions and rhymes (`-ɑːt`), which some sources return in
/// place of a full pronunciation, are not.
pub fn is_usable(record: &WordRecord) -> bool {
    let ipa = tokenizer::strip_delimiters(&record.ipa);
    !ipa.is_empty() && !ipa.starts_with('-')
}

/// Build words from records, skipping the unusable ones.
pub fn words_from_records(records: Vec<WordRecord>, tokenizer: &Tokenizer) -> Vec<Word> {
    let total = records.len();
    let words: Vec<Word> = records
        .into_iter()
        .filter(|record| {
            let usable = is_usable(record);
            if !usable {
                tracing::debug!(text = %record.text, ipa = %record.ipa, "skipping record without pronunciation");
            }
            usable
        })
        .map(|record| record.into_word(tokenizer))
        .collect();
    if words.len() < total {
        tracing::info!(kept = words.len(), skipped = total - words.len(), "loaded word records");
    }
    words
}

pub fn pairs_to_json(pairs: &[WordPair]) -> Result<String> {
    let records: Vec<MinPairRecord> = pairs.iter().map(WordPair::to_record).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn pairs_to_tsv(pairs: &[WordPair]) -> String {
    let mut out = String::new();
    for pair in pairs {
        let fields = [
            pair.first.text(),
            pair.first.ipa(),
            pair.last.text(),
            pair.last.ipa(),
            pair.contrast.as_str(),
        ];
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}
