//! Greek pass.
//!
//! Lowercases first so polytonic capitals (`Ἄ`, `ᾼ`) fold to lowercase forms
//! that decompose cleanly, then decomposes and drops every combining mark:
//! tonos, oxia, varia, perispomeni, psili, dasia, diaeresis and the iota
//! subscript all live in U+0300..=U+036F after NFD.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::analyzer::rules::{apply_rules, Rule, COMBINING_MARKS};

const FINAL_SIGMA: &[RangeInclusive<char>] = &['\u{03C2}'..='\u{03C2}'];

/// Ano teleia and the Greek question mark. Their dedicated code points
/// (U+0387, U+037E) decompose to these under NFD.
const PUNCTUATION: &[RangeInclusive<char>] = &['\u{00B7}'..='\u{00B7}', ';'..=';'];

pub(crate) static RULES: &[Rule] = &[
    Rule::Lowercase,
    Rule::Decompose,
    Rule::delete(COMBINING_MARKS),
    Rule::chars(FINAL_SIGMA, "\u{03C3}"),
    Rule::chars(PUNCTUATION, " "),
];

#[inline]
pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    apply_rules(RULES, text)
}

/// Greek pass on its own (no generic pass afterwards).
pub fn normalize_greek(text: &str) -> String {
    rewrite(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_monotonic_accents() {
        assert_eq!(normalize_greek("κόσμε"), "κοσμε");
        assert_eq!(normalize_greek("Αθήνα"), "αθηνα");
    }

    #[test]
    fn strips_polytonic_marks() {
        assert_eq!(normalize_greek("Γεῖα"), "γεια");
        // psili + oxia capital, dasia, iota subscript
        assert_eq!(normalize_greek("\u{1F0C}νθρωπος"), "ανθρωποσ");
        assert_eq!(normalize_greek("\u{1F41}δός"), "οδοσ");
        assert_eq!(normalize_greek("\u{1FB3}"), "α");
        assert_eq!(normalize_greek("\u{1FBC}"), "α");
    }

    #[test]
    fn diaeresis_removed() {
        assert_eq!(normalize_greek("προϊόν"), "προιον");
        assert_eq!(normalize_greek("Ϊ"), "ι");
    }

    #[test]
    fn final_sigma_becomes_medial() {
        assert_eq!(normalize_greek("λόγος"), "λογοσ");
        assert_eq!(normalize_greek("ΛΟΓΟΣ"), "λογοσ");
    }

    #[test]
    fn punctuation_becomes_space() {
        assert_eq!(normalize_greek("τί;"), "τι ");
        assert_eq!(normalize_greek("ναι\u{0387}οχι"), "ναι οχι");
        assert_eq!(normalize_greek("τί\u{037E}"), "τι ");
        assert_eq!(normalize_greek("α·β"), "α β");
    }

    #[test]
    fn non_greek_accents_also_stripped() {
        assert_eq!(normalize_greek("Café"), "cafe");
    }

    #[test]
    fn rewrite_is_stable() {
        for s in ["Γεῖα σου κόσμε", "ὁ λόγος", "ΤΊ ΕΊΝΑΙ;"] {
            let once = normalize_greek(s);
            assert_eq!(normalize_greek(&once), once, "input {s:?}");
        }
    }
}
