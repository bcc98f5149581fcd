//! Minimal-pair contrast classification.
//!
//! Two parsed words form a minimal pair when they differ by exactly one
//! contrastive unit:
//!
//! - **phoneme**: one phone symbol in one syllable (same length);
//! - **chroneme**: the length of phones in one syllable, symbols unchanged;
//! - **stress**: only the stress marks differ.
//!
//! Kinds are tried in that order and the first match wins.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::FilterPairs;
use crate::phonology::{self, Phone, Syllable};
use crate::word::Word;
use crate::Config;

/// The kind of contrast a pair of words shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    #[default]
    None,
    Phoneme,
    Chroneme,
    Stress,
}

impl Contrast {
    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::None => "none",
            Contrast::Phoneme => "phoneme",
            Contrast::Chroneme => "chroneme",
            Contrast::Stress => "stress",
        }
    }

    pub fn is_none(self) -> bool {
        self == Contrast::None
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where two words differ and what the differing units look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Difference {
    pub contrast: Contrast,
    /// 0-based syllable index; `None` for stress contrasts, which span the
    /// whole word.
    pub syllable: Option<usize>,
    pub first: String,
    pub second: String,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.syllable {
            Some(i) => write!(
                f,
                "{} contrast in syllable {}: {} / {}",
                self.contrast,
                i + 1,
                self.first,
                self.second
            ),
            None => write!(
                f,
                "{} contrast: {} / {}",
                self.contrast, self.first, self.second
            ),
        }
    }
}

/// Decides whether two words form a minimal pair.
#[derive(Debug, Clone)]
pub struct Classifier {
    optimise: bool,
    keep_phonemes: bool,
    keep_chronemes: bool,
    keep_stress: bool,
    filter: FilterPairs,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Classifier {
    pub fn new(cfg: &Config) -> Self {
        Self::with_filter_pairs(cfg, cfg.filter_pairs())
    }

    pub fn with_filter_pairs(cfg: &Config, filter: FilterPairs) -> Self {
        Self {
            optimise: cfg.optimise,
            keep_phonemes: cfg.keep_phonemes,
            keep_chronemes: cfg.keep_chronemes,
            keep_stress: cfg.keep_stress,
            filter,
        }
    }

    pub fn filter_pairs(&self) -> &FilterPairs {
        &self.filter
    }

    pub fn set_filter_pairs(&mut self, filter: FilterPairs) {
        self.filter = filter;
    }

    /// True if at least one contrast kind is enabled.
    pub fn keeps_any(&self) -> bool {
        self.keep_phonemes || self.keep_chronemes || self.keep_stress
    }

    /// The contrast between two words, `Contrast::None` if they are not a
    /// minimal pair of any enabled kind.
    ///
    /// # Example
    /// ```
    /// use minpair_core::{Classifier, Config, Contrast, Word};
    ///
    /// let classifier = Classifier::new(&Config {
    ///     optimise: false,
    ///     ..Config::default()
    /// });
    /// let bar = Word::new("bar", "/barˈbaz/");
    /// let bam = Word::new("bam", "/bamˈbaz/");
    /// let long = Word::new("long", "/ba:rˈbaz/");
    /// assert_eq!(classifier.classify(&bar, &bam), Contrast::Phoneme);
    /// assert_eq!(classifier.classify(&bar, &long), Contrast::Chroneme);
    /// assert_eq!(classifier.classify(&bam, &long), Contrast::None);
    /// ```
    pub fn classify(&self, a: &Word, b: &Word) -> Contrast {
        self.classify_phonology(a.phonology(), b.phonology())
    }

    pub fn classify_phonology(&self, a: &[Syllable], b: &[Syllable]) -> Contrast {
        if a.is_empty() || b.is_empty() {
            return Contrast::None;
        }
        if self.keep_phonemes && self.has_phoneme_contrast(a, b) {
            Contrast::Phoneme
        } else if self.keep_chronemes && self.has_chroneme_contrast(a, b) {
            Contrast::Chroneme
        } else if self.keep_stress && self.has_stress_contrast(a, b) {
            Contrast::Stress
        } else {
            Contrast::None
        }
    }

    /// Phoneme contrast, restricted to filter pairs when optimising.
    pub fn has_phoneme_contrast(&self, a: &[Syllable], b: &[Syllable]) -> bool {
        match phoneme_difference(a, b) {
            Some((_, pa, pb)) => !self.optimise || self.filter.contains(pa.symbol(), pb.symbol()),
            None => false,
        }
    }

    pub fn has_chroneme_contrast(&self, a: &[Syllable], b: &[Syllable]) -> bool {
        chroneme_difference(a, b).is_some()
    }

    pub fn has_stress_contrast(&self, a: &[Syllable], b: &[Syllable]) -> bool {
        stress_difference(a, b)
    }

    /// The contrast `classify` would report, with the units that differ.
    pub fn explain(&self, a: &Word, b: &Word) -> Option<Difference> {
        self.explain_phonology(a.phonology(), b.phonology())
    }

    pub fn explain_phonology(&self, a: &[Syllable], b: &[Syllable]) -> Option<Difference> {
        match self.classify_phonology(a, b) {
            Contrast::None => None,
            Contrast::Phoneme => {
                let (i, pa, pb) = phoneme_difference(a, b)?;
                Some(Difference {
                    contrast: Contrast::Phoneme,
                    syllable: Some(i),
                    first: pa.to_string(),
                    second: pb.to_string(),
                })
            }
            Contrast::Chroneme => {
                let i = chroneme_difference(a, b)?;
                Some(Difference {
                    contrast: Contrast::Chroneme,
                    syllable: Some(i),
                    first: a[i].to_string(),
                    second: b[i].to_string(),
                })
            }
            Contrast::Stress => Some(Difference {
                contrast: Contrast::Stress,
                syllable: None,
                first: phonology::stress_pattern(a),
                second: phonology::stress_pattern(b),
            }),
        }
    }
}

/// Index of the only syllable that differs, if exactly one does.
pub fn single_differing_syllable(a: &[Syllable], b: &[Syllable]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    let mut differing = a.iter().zip(b).enumerate().filter(|(_, (x, y))| x != y);
    let (i, _) = differing.next()?;
    if differing.next().is_some() {
        return None;
    }
    Some(i)
}

/// The single phone substitution between two phonologies, ignoring filters.
///
/// Returns the syllable index and the two phones. The substituted phones
/// must agree on length; the stress of that syllable is not compared.
pub fn phoneme_difference<'a>(
    a: &'a [Syllable],
    b: &'a [Syllable],
) -> Option<(usize, &'a Phone, &'a Phone)> {
    let i = single_differing_syllable(a, b)?;
    let (sa, sb) = (&a[i], &b[i]);
    if sa.len() != sb.len() {
        return None;
    }

    let mut differing = sa
        .phones()
        .iter()
        .zip(sb.phones())
        .filter(|(pa, pb)| pa != pb);
    let (pa, pb) = differing.next()?;
    if differing.next().is_some() || pa.is_long() != pb.is_long() {
        return None;
    }
    Some((i, pa, pb))
}

/// Index of the syllable whose phone lengths alone differ.
///
/// Every syllable must have the same symbols; length differences must be
/// confined to one syllable and stress must match there.
pub fn chroneme_difference(a: &[Syllable], b: &[Syllable]) -> Option<usize> {
    let i = single_differing_syllable(a, b)?;
    let (sa, sb) = (&a[i], &b[i]);
    if sa.stress() != sb.stress() || !sa.same_symbols(sb) {
        return None;
    }
    Some(i)
}

/// Same phones everywhere, different stress placement.
pub fn stress_difference(a: &[Syllable], b: &[Syllable]) -> bool {
    if a.is_empty() || a.len() != b.len() {
        return false;
    }
    let same_phones = a.iter().zip(b).all(|(x, y)| x.phones() == y.phones());
    same_phones && a.iter().zip(b).any(|(x, y)| x.stress() != y.stress())
}
