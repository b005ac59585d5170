//! Jawi letter folding.
//!
//! OCR engines and keyboards disagree on which codepoint spells several Jawi
//! letters. Folding maps each known variant onto one representative so that an
//! acceptable alternative spelling is not scored as a substitution.
//!
//! No folding target appears as a source, so folding is idempotent.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref SYMBOL_RE: Regex = Regex::new(r"^[\p{P}\p{S}]$").expect("Invalid symbol regex");
}

/// `(variant, canonical)` pairs. `None` drops the character.
const LETTER_FOLDS: &[(char, Option<char>)] = &[
    ('\u{06CC}', Some('\u{064A}')), // Farsi yeh -> yeh
    ('\u{06D2}', Some('\u{064A}')), // Yeh barree -> yeh
    ('\u{06A9}', Some('\u{0643}')), // Keheh -> kaf
    ('\u{0762}', Some('\u{06AC}')), // Keheh with dot above -> kaf with dot above (ga)
    ('\u{06AF}', Some('\u{06AC}')), // Gaf -> kaf with dot above (ga)
    ('\u{06D1}', Some('\u{06BD}')), // Yeh with three dots below -> noon with three dots above (nya)
    ('\u{06C1}', Some('\u{0647}')), // Heh goal -> heh
    ('\u{06BE}', Some('\u{0647}')), // Heh doachashmee -> heh
    ('\u{06D5}', Some('\u{0647}')), // Ae -> heh
    ('\u{06C3}', Some('\u{0629}')), // Teh marbuta goal -> teh marbuta
    ('\u{0640}', None),             // Tatweel
];

/// Arabic Presentation Forms-A (U+FB50..U+FDFF) and -B (U+FE70..U+FEFF).
#[inline]
fn is_presentation_form(c: char) -> bool {
    matches!(c, '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

/// Presentation-block punctuation and symbols (ornate parentheses, the riyal
/// sign, ligated honorifics) stay intact so punctuation stripping sees them.
fn is_punctuation_or_symbol(c: char) -> bool {
    let mut buf = [0u8; 4];
    SYMBOL_RE.is_match(c.encode_utf8(&mut buf))
}

fn fold_letter(c: char) -> Option<char> {
    LETTER_FOLDS
        .iter()
        .find(|(variant, _)| *variant == c)
        .map_or(Some(c), |(_, canonical)| *canonical)
}

/// Fold Jawi letter variants to their canonical representative.
///
/// Presentation forms are first expanded through their compatibility
/// decomposition (a positional glyph becomes its base letter, a ligature
/// becomes its letters) and the letters they yield are folded as well.
/// Presentation-block punctuation and symbols are left untouched.
pub fn fold_jawi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_presentation_form(c) && !is_punctuation_or_symbol(c) {
            for d in std::iter::once(c).nfkc() {
                out.extend(fold_letter(d));
            }
        } else {
            out.extend(fold_letter(c));
        }
    }
    out
}
