//! Syriac pass.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::analyzer::rules::{apply_rules, Rule};

/// Eastern and Western vowel points, qushshaya/rukkakha and the other
/// combining marks of the block.
const VOWEL_POINTS: &[RangeInclusive<char>] = &['\u{0730}'..='\u{074A}'];

/// Abbreviation mark and superscript alaph.
const MARKS: &[RangeInclusive<char>] = &['\u{070F}'..='\u{070F}', '\u{0711}'..='\u{0711}'];

/// End of paragraph through the harklean asteriscus.
const PUNCTUATION: &[RangeInclusive<char>] = &['\u{0700}'..='\u{070D}'];

pub(crate) static RULES: &[Rule] = &[
    Rule::delete(VOWEL_POINTS),
    Rule::delete(MARKS),
    Rule::chars(PUNCTUATION, " "),
];

#[inline]
pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    apply_rules(RULES, text)
}

/// Syriac pass on its own (no generic pass afterwards).
pub fn normalize_syriac(text: &str) -> String {
    rewrite(text).into_owned()
}
