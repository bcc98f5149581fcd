//! Words, minimal pairs and their serialisable projections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classifier::Contrast;
use crate::phonology::{self, Syllable};
use crate::tokenizer::{self, Tokenizer};

/// A word with its transcription and the phonology derived from it.
///
/// The phonology is computed once on construction; the fields are private so
/// it can never drift from `ipa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WordRecord", into = "WordRecord")]
pub struct Word {
    text: String,
    ipa: String,
    phonology: Vec<Syllable>,
}

impl Word {
    /// Build a word using the standard symbol tables.
    pub fn new<T: Into<String>>(text: T, ipa: &str) -> Self {
        Self::with_tokenizer(text, ipa, Tokenizer::standard())
    }

    pub fn with_tokenizer<T: Into<String>>(text: T, ipa: &str, tokenizer: &Tokenizer) -> Self {
        let text = text.into();
        let ipa = tokenizer::strip_delimiters(ipa).to_string();
        let phonology = phonology::parse_ipa_with(tokenizer, &ipa);
        if phonology.is_empty() && !ipa.is_empty() {
            tracing::debug!(text = %text, ipa = %ipa, "transcription has no recognisable phones");
        }
        Self {
            text,
            ipa,
            phonology,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Transcription with enclosing delimiters removed.
    pub fn ipa(&self) -> &str {
        &self.ipa
    }

    pub fn phonology(&self) -> &[Syllable] {
        &self.phonology
    }

    /// Side-effect-free projection used for serialisation.
    pub fn to_record(&self) -> WordRecord {
        WordRecord {
            text: self.text.clone(),
            ipa: self.ipa.clone(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}/", self.text, self.ipa)
    }
}

/// Interchange form of a word: `{ "text": …, "ipa": … }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub ipa: String,
}

impl WordRecord {
    pub fn new<T: Into<String>, I: Into<String>>(text: T, ipa: I) -> Self {
        Self {
            text: text.into(),
            ipa: ipa.into(),
        }
    }

    pub fn into_word(self, tokenizer: &Tokenizer) -> Word {
        Word::with_tokenizer(self.text, &self.ipa, tokenizer)
    }
}

impl From<WordRecord> for Word {
    fn from(record: WordRecord) -> Self {
        Word::new(record.text, &record.ipa)
    }
}

impl From<Word> for WordRecord {
    fn from(word: Word) -> Self {
        WordRecord {
            text: word.text,
            ipa: word.ipa,
        }
    }
}

/// Two words that form a minimal pair, with the contrast between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub first: Word,
    pub last: Word,
    pub contrast: Contrast,
}

impl WordPair {
    pub fn new(first: Word, last: Word, contrast: Contrast) -> Self {
        Self {
            first,
            last,
            contrast,
        }
    }

    pub fn to_record(&self) -> MinPairRecord {
        MinPairRecord {
            first: self.first.to_record(),
            last: self.last.to_record(),
            contrast: Some(self.contrast),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {} ({})", self.first, self.last, self.contrast)
    }
}

/// Interchange form of a pair, consumed by deck exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinPairRecord {
    pub first: WordRecord,
    pub last: WordRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<Contrast>,
}
