//! Arabic pass.
//!
//! Strips tashkeel and tatweel and folds the hamza-carrying letter shapes onto
//! their bare forms, so `أحمد`, `احمد` and `إحمد` all index the same.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::analyzer::rules::{apply_rules, Rule};

/// Harakat, tanween, shadda, sukun and friends, the superscript alef, and the
/// Quranic annotation marks.
const TASHKEEL: &[RangeInclusive<char>] = &[
    '\u{064B}'..='\u{065F}',
    '\u{0670}'..='\u{0670}',
    '\u{06D6}'..='\u{06ED}',
];

/// آ أ إ ا ٱ
const ALEF_VARIANTS: &[RangeInclusive<char>] = &[
    '\u{0622}'..='\u{0623}',
    '\u{0625}'..='\u{0625}',
    '\u{0627}'..='\u{0627}',
    '\u{0671}'..='\u{0671}',
];

/// ي ى ئ
const YEH_VARIANTS: &[RangeInclusive<char>] = &[
    '\u{064A}'..='\u{064A}',
    '\u{0649}'..='\u{0649}',
    '\u{0626}'..='\u{0626}',
];

/// ؤ
const WAW_HAMZA: &[RangeInclusive<char>] = &['\u{0624}'..='\u{0624}'];

const TATWEEL: &[RangeInclusive<char>] = &['\u{0640}'..='\u{0640}'];

/// ، ؍ ؎ ؏ ؛ ؞ ؟
const PUNCTUATION: &[RangeInclusive<char>] = &[
    '\u{060C}'..='\u{060F}',
    '\u{061B}'..='\u{061B}',
    '\u{061E}'..='\u{061F}',
];

pub(crate) static RULES: &[Rule] = &[
    Rule::delete(TASHKEEL),
    Rule::chars(ALEF_VARIANTS, "\u{0627}"),
    Rule::chars(YEH_VARIANTS, "\u{064A}"),
    Rule::chars(WAW_HAMZA, "\u{0648}"),
    Rule::delete(TATWEEL),
    Rule::chars(PUNCTUATION, " "),
];

#[inline]
pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    apply_rules(RULES, text)
}

/// Arabic pass on its own (no generic pass afterwards).
pub fn normalize_arabic(text: &str) -> String {
    rewrite(text).into_owned()
}
