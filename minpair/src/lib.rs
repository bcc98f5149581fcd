//! Command helpers behind the `minpair` binary.
//!
//! Each sub-command is a plain function returning the text to print, so the
//! binary stays a thin argument-parsing shell and the behaviour can be tested
//! without spawning a process.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use minpair_core::filter::format_filter_groups;
use minpair_core::phonology;
use minpair_core::records::{self, RecordFormat};
use minpair_core::symbols::CONFUSABLE_GROUPS;
use minpair_core::{Classifier, Config, Generator, Tokenizer, Word, WordPair};

/// Options shared by the sub-commands that classify words.
#[derive(Debug, Clone, Default, Args)]
pub struct ContrastArgs {
    /// TOML configuration file; flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep every phoneme contrast, not only confusable ones
    #[arg(long)]
    pub no_optimise: bool,

    /// Do not report phoneme contrasts
    #[arg(long)]
    pub no_phonemes: bool,

    /// Do not report length (chroneme) contrasts
    #[arg(long)]
    pub no_chronemes: bool,

    /// Do not report stress contrasts
    #[arg(long)]
    pub no_stress: bool,

    /// Filter file with confusable groups, one comma-separated group per line
    #[arg(short = 'f', long, value_name = "FILE")]
    pub filter: Option<PathBuf>,

    /// Fail instead of falling back to the default groups when the filter
    /// file cannot be used
    #[arg(long)]
    pub strict_filter: bool,
}

impl ContrastArgs {
    /// Configuration from the optional file with flag overrides applied.
    pub fn config(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load_toml(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => Config::default(),
        };
        if self.no_optimise {
            cfg.optimise = false;
        }
        if self.no_phonemes {
            cfg.keep_phonemes = false;
        }
        if self.no_chronemes {
            cfg.keep_chronemes = false;
        }
        if self.no_stress {
            cfg.keep_stress = false;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration for `check`: as `config`, but phoneme contrasts are never
    /// restricted to confusable groups.
    pub fn check_config(&self) -> Result<Config> {
        let mut cfg = self.config()?;
        cfg.optimise = false;
        Ok(cfg)
    }

    /// A generator for `cfg`, with the filter file loaded if one was given.
    pub fn generator(&self, cfg: &Config) -> Result<Generator> {
        let mut generator = Generator::new(cfg);
        if let Some(path) = &self.filter {
            if let Err(e) = generator.set_filter_pairs_from_file(path) {
                if self.strict_filter {
                    return Err(e).context("loading filter file");
                }
                tracing::warn!(path = %path.display(), "filter file unusable, using default confusable groups");
            }
        }
        Ok(generator)
    }
}

/// Token and syllable breakdown of each transcription.
pub fn analyse<S: AsRef<str>>(tokenizer: &Tokenizer, transcriptions: &[S]) -> String {
    let mut blocks = Vec::new();
    for ipa in transcriptions {
        let ipa = ipa.as_ref();
        let report = tokenizer.tokenize_report(ipa);
        let mut lines = vec![
            format!("ipa: {ipa}"),
            format!("tokens: {}", report.tokens.join(" ")),
        ];
        if !report.dropped.is_empty() {
            let dropped: String = report.dropped.iter().collect();
            lines.push(format!("dropped: {dropped}"));
        }
        lines.push(phonology::describe(&phonology::parse(&report.tokens)));
        blocks.push(lines.join("\n"));
    }
    blocks.join("\n\n")
}

/// The parsed phonology of each transcription as JSON.
pub fn analyse_json<S: AsRef<str>>(tokenizer: &Tokenizer, transcriptions: &[S]) -> Result<String> {
    let parsed: Vec<_> = transcriptions
        .iter()
        .map(|ipa| {
            serde_json::json!({
                "ipa": ipa.as_ref(),
                "syllables": phonology::parse_ipa_with(tokenizer, ipa.as_ref()),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&parsed)?)
}

/// Whether two transcriptions form a minimal pair, and why.
pub fn check(classifier: &Classifier, tokenizer: &Tokenizer, first: &str, second: &str) -> String {
    let a = Word::with_tokenizer(first, first, tokenizer);
    let b = Word::with_tokenizer(second, second, tokenizer);
    match classifier.explain(&a, &b) {
        Some(diff) => format!("/{}/ ~ /{}/: {}", a.ipa(), b.ipa(), diff),
        None => format!("/{}/ ~ /{}/: not a minimal pair", a.ipa(), b.ipa()),
    }
}

/// Read word records and turn the usable ones into words.
pub fn load_words(path: &Path, format: Option<RecordFormat>, tokenizer: &Tokenizer) -> Result<Vec<Word>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading word list {}", path.display()))?;
    let format = format.unwrap_or_else(|| RecordFormat::from_path(path));
    let records = format
        .parse_records(&content)
        .with_context(|| format!("parsing {} word list {}", format, path.display()))?;
    let words = records::words_from_records(records, tokenizer);
    if words.is_empty() {
        bail!("no usable word records in {}", path.display());
    }
    Ok(words)
}

/// Run the search, logging progress at debug level.
pub fn generate(generator: &Generator, words: &[Word]) -> Vec<WordPair> {
    let total = minpair_core::comparison_count(words.len());
    let mut last_percent = 0;
    generator.generate_with_progress(words, |done| {
        let percent = if total == 0 { 100 } else { done * 100 / total };
        if percent / 10 > last_percent / 10 {
            tracing::debug!(done, total, "{percent}% of comparisons done");
        }
        last_percent = percent;
    })
}

/// Write pairs to `out`, or return them for printing when `out` is `None`.
pub fn write_pairs(pairs: &[WordPair], format: RecordFormat, out: Option<&Path>) -> Result<Option<String>> {
    let text = format.format_pairs(pairs)?;
    match out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), pairs = pairs.len(), "wrote minimal pairs");
            Ok(None)
        }
        None => Ok(Some(text)),
    }
}

/// The built-in confusable groups in filter file format.
pub fn filters_template() -> String {
    let mut out = String::from(
        "# Confusable groups, one per line, symbols separated by commas.\n\
         # Every two symbols in a group form a filter pair.\n",
    );
    out.push_str(&format_filter_groups(CONFUSABLE_GROUPS));
    out
}
