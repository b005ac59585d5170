//! Text normalization ahead of scoring.
//!
//! Pipeline: NFC composition, Jawi letter folding, optional punctuation and
//! symbol stripping, optional digit stripping, recomposition, then whitespace
//! collapsing. Every stage is a pure function of its input and the result is a
//! fixed point: normalizing it again returns it unchanged.

use crate::config::NormalizationConfig;
use crate::jawi::fold_jawi;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Every punctuation (`P*`) and symbol (`S*`) character, which includes the
    /// Arabic comma, semicolon, question mark, percent sign and full stop.
    static ref PUNCTUATION_RE: Regex =
        Regex::new(r"[\p{P}\p{S}]+").expect("Invalid punctuation regex");

    /// Decimal digits of every script (ASCII, Arabic-Indic, Extended Arabic-Indic, ...).
    static ref DIGIT_RE: Regex = Regex::new(r"\p{Nd}+").expect("Invalid digit regex");
}

/// Normalize `text` according to `config`.
pub fn normalize(text: &str, config: &NormalizationConfig) -> String {
    let composed: String = text.nfc().collect();
    let mut folded = fold_jawi(&composed);

    if config.remove_punctuation {
        folded = PUNCTUATION_RE.replace_all(&folded, "").into_owned();
    }
    if config.remove_numbers {
        folded = DIGIT_RE.replace_all(&folded, "").into_owned();
    }

    // Stripping can leave a base letter directly before a combining mark.
    let recomposed: String = folded.nfc().collect();
    let normalized = collapse_whitespace(&recomposed);

    if normalized != text {
        log::trace!("normalized {:?} -> {:?}", text, normalized);
    }
    normalized
}

/// Collapse runs of Unicode whitespace to a single ASCII space and trim.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
