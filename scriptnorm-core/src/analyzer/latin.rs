//! Latin pass.
//!
//! Decomposes and drops combining accents, then runs an explicit fold table
//! over the precomposed vowels (macron, breve, ring, tilde, diaeresis) and
//! `ç`/`ñ`. After NFD the table rarely matches anything; it is there for
//! input whose precomposed letters do not decompose under the Unicode version
//! in use.
//!
//! Case is preserved. Lowercasing is left to the generic pass.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::analyzer::rules::{apply_rules, Rule, COMBINING_MARKS};

macro_rules! char_set {
    ($($c:literal),+ $(,)?) => {
        &[$($c..=$c),+]
    };
}

// ā ă å ã ä
const A_LOWER: &[RangeInclusive<char>] =
    char_set!['\u{0101}', '\u{0103}', '\u{00E5}', '\u{00E3}', '\u{00E4}'];
// ē ĕ ë ẽ
const E_LOWER: &[RangeInclusive<char>] = char_set!['\u{0113}', '\u{0115}', '\u{00EB}', '\u{1EBD}'];
// ī ĭ ï ĩ
const I_LOWER: &[RangeInclusive<char>] = char_set!['\u{012B}', '\u{012D}', '\u{00EF}', '\u{0129}'];
// ō ŏ õ ö
const O_LOWER: &[RangeInclusive<char>] = char_set!['\u{014D}', '\u{014F}', '\u{00F5}', '\u{00F6}'];
// ū ŭ ů ũ ü
const U_LOWER: &[RangeInclusive<char>] =
    char_set!['\u{016B}', '\u{016D}', '\u{016F}', '\u{0169}', '\u{00FC}'];
// ȳ ÿ
const Y_LOWER: &[RangeInclusive<char>] = char_set!['\u{0233}', '\u{00FF}'];

// Ā Ă Å Ã Ä
const A_UPPER: &[RangeInclusive<char>] =
    char_set!['\u{0100}', '\u{0102}', '\u{00C5}', '\u{00C3}', '\u{00C4}'];
// Ē Ĕ Ë Ẽ
const E_UPPER: &[RangeInclusive<char>] = char_set!['\u{0112}', '\u{0114}', '\u{00CB}', '\u{1EBC}'];
// Ī Ĭ Ï Ĩ
const I_UPPER: &[RangeInclusive<char>] = char_set!['\u{012A}', '\u{012C}', '\u{00CF}', '\u{0128}'];
// Ō Ŏ Õ Ö
const O_UPPER: &[RangeInclusive<char>] = char_set!['\u{014C}', '\u{014E}', '\u{00D5}', '\u{00D6}'];
// Ū Ŭ Ů Ũ Ü
const U_UPPER: &[RangeInclusive<char>] =
    char_set!['\u{016A}', '\u{016C}', '\u{016E}', '\u{0168}', '\u{00DC}'];
// Ȳ Ÿ
const Y_UPPER: &[RangeInclusive<char>] = char_set!['\u{0232}', '\u{0178}'];

const C_CEDILLA_LOWER: &[RangeInclusive<char>] = char_set!['\u{00E7}'];
const C_CEDILLA_UPPER: &[RangeInclusive<char>] = char_set!['\u{00C7}'];
const N_TILDE_LOWER: &[RangeInclusive<char>] = char_set!['\u{00F1}'];
const N_TILDE_UPPER: &[RangeInclusive<char>] = char_set!['\u{00D1}'];

pub(crate) static RULES: &[Rule] = &[
    Rule::Decompose,
    Rule::delete(COMBINING_MARKS),
    Rule::chars(A_LOWER, "a"),
    Rule::chars(E_LOWER, "e"),
    Rule::chars(I_LOWER, "i"),
    Rule::chars(O_LOWER, "o"),
    Rule::chars(U_LOWER, "u"),
    Rule::chars(Y_LOWER, "y"),
    Rule::chars(A_UPPER, "A"),
    Rule::chars(E_UPPER, "E"),
    Rule::chars(I_UPPER, "I"),
    Rule::chars(O_UPPER, "O"),
    Rule::chars(U_UPPER, "U"),
    Rule::chars(Y_UPPER, "Y"),
    Rule::chars(C_CEDILLA_LOWER, "c"),
    Rule::chars(C_CEDILLA_UPPER, "C"),
    Rule::chars(N_TILDE_LOWER, "n"),
    Rule::chars(N_TILDE_UPPER, "N"),
];

#[inline]
pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    apply_rules(RULES, text)
}

/// Latin pass on its own (no generic pass afterwards).
pub fn normalize_latin(text: &str) -> String {
    rewrite(text).into_owned()
}
