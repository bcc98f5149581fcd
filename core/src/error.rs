//! Error types for minpair-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A non-empty transcription contained no recognisable IPA symbol.
    #[error("no recognisable IPA symbols in transcription {ipa:?}")]
    MalformedTranscription { ipa: String },

    #[error("cannot read filter file {}: {source}", .path.display())]
    FilterFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid filter file at line {line} ({content:?}): {reason}")]
    InvalidFilterFile {
        line: usize,
        content: String,
        reason: String,
    },

    /// Phoneme, chroneme and stress contrasts are all disabled.
    #[error("every contrast kind is disabled; no minimal pairs can be generated")]
    ConfigurationConflict,

    #[error("malformed word record at line {line}: {content:?}")]
    InvalidRecord { line: usize, content: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot serialise configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
