//! Phonological parser: tokens to syllables of phones.
//!
//! Stress and syllable boundaries come from the marks `.`, `ˈ` and `ˌ`; each
//! mark opens a new syllable carrying that stress. Length is taken from a
//! following `ː` or from a doubled symbol (`ss`).

use std::fmt;

use serde::Serialize;

use crate::symbols::{LENGTH_MARK, PRIMARY_STRESS, SECONDARY_STRESS, SYLLABLE_BREAK};
use crate::tokenizer::{self, Tokenizer};

/// A single sound with its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone {
    symbol: String,
    long: bool,
}

impl Phone {
    pub fn new<T: Into<String>>(symbol: T, long: bool) -> Self {
        Self {
            symbol: symbol.into(),
            long,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_long(&self) -> bool {
        self.long
    }

    fn lengthen(&mut self) {
        self.long = true;
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)?;
        if self.long {
            write!(f, "{LENGTH_MARK}")?;
        }
        Ok(())
    }
}

/// Stress carried by a syllable, named after the mark that opened it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stress {
    /// Opened by `.` or by the start of the word.
    #[default]
    Unstressed,
    /// Opened by `ˈ`.
    Primary,
    /// Opened by `ˌ`.
    Secondary,
}

impl Stress {
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            SYLLABLE_BREAK => Some(Stress::Unstressed),
            PRIMARY_STRESS => Some(Stress::Primary),
            SECONDARY_STRESS => Some(Stress::Secondary),
            _ => None,
        }
    }

    /// Parse a whole token; only single-character marks qualify.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(mark), None) => Self::from_mark(mark),
            _ => None,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Stress::Unstressed => SYLLABLE_BREAK,
            Stress::Primary => PRIMARY_STRESS,
            Stress::Secondary => SECONDARY_STRESS,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Stress::Unstressed => "unstressed",
            Stress::Primary => "primary stress",
            Stress::Secondary => "secondary stress",
        }
    }
}

/// An ordered group of phones with its stress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    stress: Stress,
    phones: Vec<Phone>,
}

impl Syllable {
    pub fn new(stress: Stress, phones: Vec<Phone>) -> Self {
        Self { stress, phones }
    }

    pub fn stress(&self) -> Stress {
        self.stress
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Same phones, ignoring length.
    pub fn same_symbols(&self, other: &Syllable) -> bool {
        self.phones.len() == other.phones.len()
            && self
                .phones
                .iter()
                .zip(&other.phones)
                .all(|(a, b)| a.symbol == b.symbol)
    }
}

/// Phones without the stress mark.
impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phone in &self.phones {
            write!(f, "{phone}")?;
        }
        Ok(())
    }
}

/// Group tokens into syllables.
///
/// A length mark, or a token equal to the symbol of the phone right before
/// it in the same syllable, lengthens that phone instead of adding a new one
/// (`aː`, `aa` and `aːa` all give one long `a`). A syllable mark closes the
/// syllable in progress (if it has any phones) and sets the stress of the
/// next one.
///
/// # Example
/// ```
/// use minpair_core::phonology::parse;
/// use minpair_core::Stress;
///
/// let syllables = parse(&["b", "a", "ˈ", "t", "a", "a"]);
/// assert_eq!(syllables.len(), 2);
/// assert_eq!(syllables[1].stress(), Stress::Primary);
/// assert_eq!(syllables[1].phones()[1].symbol(), "a");
/// assert!(syllables[1].phones()[1].is_long());
/// ```
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Vec<Syllable> {
    let mut out = Vec::new();
    let mut stress = Stress::Unstressed;
    let mut phones: Vec<Phone> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if let Some(mark) = Stress::from_token(token) {
            close_syllable(&mut out, stress, &mut phones);
            stress = mark;
            continue;
        }
        let repeats_last = phones.last().is_some_and(|p| p.symbol() == token);
        if tokenizer::is_length_mark_token(token) || repeats_last {
            if let Some(last) = phones.last_mut() {
                last.lengthen();
            }
        } else {
            phones.push(Phone::new(token, false));
        }
    }
    close_syllable(&mut out, stress, &mut phones);
    out
}

fn close_syllable(out: &mut Vec<Syllable>, stress: Stress, phones: &mut Vec<Phone>) {
    if !phones.is_empty() {
        out.push(Syllable::new(stress, std::mem::take(phones)));
    }
}

/// Tokenize with the standard tables and parse.
pub fn parse_ipa(ipa: &str) -> Vec<Syllable> {
    parse_ipa_with(Tokenizer::standard(), ipa)
}

pub fn parse_ipa_with(tokenizer: &Tokenizer, ipa: &str) -> Vec<Syllable> {
    parse(&tokenizer.tokenize(ipa))
}

/// The stress marks of every syllable, in order (e.g. `.ˈ`).
pub fn stress_pattern(phonology: &[Syllable]) -> String {
    phonology.iter().map(|s| s.stress.mark()).collect()
}

/// Render a phonology back to IPA, omitting the mark of an unstressed first
/// syllable.
pub fn render(phonology: &[Syllable]) -> String {
    let mut out = String::new();
    for (i, syllable) in phonology.iter().enumerate() {
        if i > 0 || syllable.stress != Stress::Unstressed {
            out.push(syllable.stress.mark());
        }
        out.push_str(&syllable.to_string());
    }
    out
}

/// Human-readable breakdown, one line per syllable.
pub fn describe(phonology: &[Syllable]) -> String {
    if phonology.is_empty() {
        return "no syllables".to_string();
    }
    phonology
        .iter()
        .enumerate()
        .map(|(i, syllable)| {
            let phones: Vec<String> = syllable.phones.iter().map(Phone::to_string).collect();
            format!(
                "syllable {} ({}): {}",
                i + 1,
                syllable.stress.describe(),
                phones.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
