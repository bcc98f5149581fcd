//! Static IPA symbol tables.
//!
//! These tables drive the tokenizer and the default confusable filter:
//! - `SOUNDS` lists symbols that span more than one code point (affricates,
//!   nasal vowels, palatalised consonants) or that fall outside ASCII. The
//!   tokenizer matches them greedily before falling back to ASCII letters.
//! - `BAD_TRANSLITERATIONS` maps untied affricates and affricate ligatures to
//!   the tied spelling so every input source tokenizes the same way.
//! - `CONFUSABLE_GROUPS` are the default "interesting difference" classes.
//!
//! Symbols are written in their usual spelling here; the tokenizer
//! canonically decomposes both the tables and the input before comparing.

use phf::phf_map;

/// Syllable boundary without stress.
pub const SYLLABLE_BREAK: char = '.';
/// Primary stress mark (also a syllable boundary).
pub const PRIMARY_STRESS: char = 'ˈ';
/// Secondary stress mark (also a syllable boundary).
pub const SECONDARY_STRESS: char = 'ˌ';

/// All characters that open a new syllable.
pub const SYLLABLE_MARKS: [char; 3] = [SYLLABLE_BREAK, PRIMARY_STRESS, SECONDARY_STRESS];

/// IPA length mark.
pub const LENGTH_MARK: char = 'ː';
/// ASCII colon, often used by transcribers in place of `ː`.
pub const LEGACY_LENGTH_MARK: char = ':';

/// Combining double inverted breve, the tie bar used for affricates.
pub const TIE: char = '\u{0361}';
/// Combining double breve below, normalised to `TIE`.
pub const TIE_BELOW: char = '\u{035C}';

/// Modifiers that stay attached to the symbol they follow.
pub const DIACRITICS: [char; 8] = [
    'ʰ',        // aspiration
    'ʲ',        // palatalisation
    'ʷ',        // labialisation
    'ⁿ',        // nasal release
    '\u{0329}', // syllabic
    '\u{030D}', // syllabic (above)
    '\u{032F}', // non-syllabic
    '\u{0303}', // nasalisation
];

/// Symbols recognised as a single unit by the tokenizer.
pub const SOUNDS: &[&str] = &[
    // Tied affricates
    "t\u{0361}ɕ", "t\u{0361}ʂ", "t\u{0361}s", "t\u{0361}ʃ",
    "d\u{0361}ʐ", "d\u{0361}ʑ", "d\u{0361}z", "d\u{0361}ʒ",
    // Untied affricates and ligatures (normalised after matching)
    "tɕ", "tʂ", "ts", "tʃ", "dʐ", "dʑ", "dz", "dʒ",
    "ʨ", "ʦ", "ʧ", "ʥ", "ʣ", "ʤ",
    // Consonants
    "ʂ", "ɕ", "ɲ", "ŋ", "ɡʲ", "xʲ", "ʐ", "ʑ", "ś", "ɡ", "ʁ", "ʃ", "ʒ", "ɟ",
    "ɫ", "ʎ", "ç", "ɣ", "θ", "ð", "ɹ", "ɾ", "ʀ", "ɬ", "ɮ", "ɭ", "ɳ", "ɻ",
    "ɽ", "ʋ", "ɰ", "ɸ", "β", "χ", "ħ", "ʕ", "ʔ", "ɦ", "ɱ", "ʝ", "ɓ", "ɗ",
    "ɠ", "ʈ", "ɖ", "ɢ", "ʍ", "ʙ", "ʜ", "ɧ", "ɺ", "ʟ", "ɴ",
    // Oral vowels
    "ɔ", "ɛ", "ɪ", "ɨ", "ø", "ə", "ɑ", "œ", "æ", "ʌ", "ɐ", "ɤ", "ɒ", "ʊ",
    "ɜ", "ɞ", "ɘ", "ɵ", "ʉ", "ɯ", "ɶ", "ʏ", "ɚ", "ɝ",
    // Nasal vowels
    "ɑ\u{0303}", "ɛ\u{0303}", "œ\u{0303}", "ɔ\u{0303}",
    // Semi-vowels
    "ɥ",
];

/// Spellings normalised to their canonical form right after tokenization.
pub static BAD_TRANSLITERATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "tɕ" => "t\u{0361}ɕ",
    "tʂ" => "t\u{0361}ʂ",
    "ts" => "t\u{0361}s",
    "tʃ" => "t\u{0361}ʃ",
    "dʐ" => "d\u{0361}ʐ",
    "dʑ" => "d\u{0361}ʑ",
    "dz" => "d\u{0361}z",
    "dʒ" => "d\u{0361}ʒ",
    "ʨ" => "t\u{0361}ɕ",
    "ʦ" => "t\u{0361}s",
    "ʧ" => "t\u{0361}ʃ",
    "ʥ" => "d\u{0361}ʑ",
    "ʣ" => "d\u{0361}z",
    "ʤ" => "d\u{0361}ʒ",
    "g" => "ɡ",
};

/// Default groups of phones that learners tend to confuse.
///
/// Every 2-combination inside a group becomes a filter pair.
pub const CONFUSABLE_GROUPS: &[&[&str]] = &[
    // Consonants
    &[
        "t\u{0361}ɕ", "t\u{0361}ʂ", "t\u{0361}s", "t\u{0361}ʃ",
        "d\u{0361}ʐ", "d\u{0361}ʑ", "d\u{0361}z", "d\u{0361}ʒ",
        "ʂ", "ʒ", "ʃ", "ɕ",
    ],
    &["n", "ɲ", "ŋ"],
    &["v", "f"],
    &["x", "h", "xʲ", "ç"],
    &["z", "ʑ", "ʐ", "s", "ś", "ʂ"],
    &["ʎ", "ɫ", "l"],
    &["ɟ", "j", "ɡ", "ɡʲ"],
    &["θ", "f", "s"],
    &["ð", "v", "z", "d"],
    &["r", "ɾ", "ɹ", "ʁ", "l"],
    // Oral vowels and semi-vowels
    &["ɑ", "a", "ɐ", "ə", "ʌ"],
    &["e", "ɛ", "ɪ", "i"],
    &["ɨ", "i", "j", "ɪ"],
    &["ɔ", "o", "ø", "œ"],
    &["ɥ", "j"],
    &["ɥ", "u", "ɤ", "y", "w"],
    &["i", "e"],
    &["æ", "ɛ", "a"],
    &["ʊ", "u"],
    // Nasal vowels
    &["ɛ\u{0303}", "ɛ"],
    &["ɛ\u{0303}", "ə"],
    &["ɔ\u{0303}", "ɔ"],
    &["œ\u{0303}", "œ", "ɔ"],
    &["ɛ\u{0303}", "ɔ\u{0303}", "œ\u{0303}", "ɑ\u{0303}"],
];

pub fn is_syllable_mark(c: char) -> bool {
    SYLLABLE_MARKS.contains(&c)
}

pub fn is_length_mark(c: char) -> bool {
    c == LENGTH_MARK
}

pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

/// Return the canonical spelling of `symbol`.
///
/// Untied affricates (`tʃ`) and ligatures (`ʧ`) become the tied form
/// (`t͡ʃ`); anything else is returned unchanged. Applying this twice gives
/// the same result as applying it once.
pub fn normalize_transliteration(symbol: &str) -> String {
    match BAD_TRANSLITERATIONS.get(symbol) {
        Some(tied) => (*tied).to_string(),
        None => symbol.to_string(),
    }
}
