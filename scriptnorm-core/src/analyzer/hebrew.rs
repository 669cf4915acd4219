//! Hebrew pass.
//!
//! Order is load-bearing here. The `בן־אדם` idiom has to be rewritten while
//! its maqqef is still present, i.e. after nikud is gone but before the
//! te'amim strip and the maqqef-to-space rule. Likewise the whole-word
//! overrides run before the general final-letter fold.
//!
//! The general fold covers only final kaf, pe and tsadi. Final nun and final
//! mem are left alone outside the whole-word overrides.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use crate::analyzer::rules::{apply_rules, Rule};

/// Vowel points, dagesh, rafe, shin/sin dots, qamats qatan.
const NIKUD: &[RangeInclusive<char>] = &[
    '\u{05B0}'..='\u{05BC}',
    '\u{05BF}'..='\u{05BF}',
    '\u{05C1}'..='\u{05C2}',
    '\u{05C4}'..='\u{05C5}',
    '\u{05C7}'..='\u{05C7}',
];

/// Cantillation accents plus paseq, sof pasuq, nun hafukha and the
/// unassigned tail of the block.
const TEAMIM: &[RangeInclusive<char>] = &[
    '\u{0591}'..='\u{05AF}',
    '\u{05BD}'..='\u{05BD}',
    '\u{05C0}'..='\u{05C0}',
    '\u{05C3}'..='\u{05C3}',
    '\u{05C6}'..='\u{05C6}',
    '\u{05C8}'..='\u{05CF}',
];

const MAQQEF: &[RangeInclusive<char>] = &['\u{05BE}'..='\u{05BE}'];

const FINAL_KAF: &[RangeInclusive<char>] = &['\u{05DA}'..='\u{05DA}'];
const FINAL_PE: &[RangeInclusive<char>] = &['\u{05E3}'..='\u{05E3}'];
const FINAL_TSADI: &[RangeInclusive<char>] = &['\u{05E5}'..='\u{05E5}'];

/// ׃ ׀ ׆
///
/// All three are also in `TEAMIM` and are already deleted when this runs.
const PUNCTUATION: &[RangeInclusive<char>] = &[
    '\u{05C3}'..='\u{05C3}',
    '\u{05C0}'..='\u{05C0}',
    '\u{05C6}'..='\u{05C6}',
];

pub(crate) static RULES: &[Rule] = &[
    Rule::delete(NIKUD),
    // בן־אדם -> בנאדמ
    Rule::literal(
        "\u{05D1}\u{05DF}\u{05BE}\u{05D0}\u{05D3}\u{05DD}",
        "\u{05D1}\u{05E0}\u{05D0}\u{05D3}\u{05DE}",
    ),
    Rule::delete(TEAMIM),
    Rule::chars(MAQQEF, " "),
    // מלך -> מלכ
    Rule::literal("\u{05DE}\u{05DC}\u{05DA}", "\u{05DE}\u{05DC}\u{05DB}"),
    // שלום -> שלומ
    Rule::literal(
        "\u{05E9}\u{05DC}\u{05D5}\u{05DD}",
        "\u{05E9}\u{05DC}\u{05D5}\u{05DE}",
    ),
    // עולם -> עולמ
    Rule::literal(
        "\u{05E2}\u{05D5}\u{05DC}\u{05DD}",
        "\u{05E2}\u{05D5}\u{05DC}\u{05DE}",
    ),
    Rule::chars(FINAL_KAF, "\u{05DB}"),
    Rule::chars(FINAL_PE, "\u{05E4}"),
    Rule::chars(FINAL_TSADI, "\u{05E6}"),
    Rule::chars(PUNCTUATION, " "),
];

#[inline]
pub(crate) fn rewrite(text: &str) -> Cow<'_, str> {
    apply_rules(RULES, text)
}

/// Hebrew pass on its own (no generic pass afterwards).
pub fn normalize_hebrew(text: &str) -> String {
    rewrite(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nikud() {
        assert_eq!(normalize_hebrew("שָׁלוֹם"), "שלומ");
        assert_eq!(normalize_hebrew("עוֹלָם"), "עולמ");
        assert_eq!(normalize_hebrew("בְּרֵאשִׁית"), "בראשית");
    }

    #[test]
    fn strips_teamim() {
        // etnahta, zaqef qatan, meteg
        assert_eq!(normalize_hebrew("א\u{0591}ב\u{0594}ג\u{05BD}"), "אבג");
        assert_eq!(normalize_hebrew("א\u{05AF}\u{05C8}\u{05CF}"), "א");
    }

    #[test]
    fn idiom_rewritten_before_maqqef_is_split() {
        assert_eq!(normalize_hebrew("בן־אדם"), "בנאדמ");
        assert_eq!(normalize_hebrew("בֶּן־אָדָם"), "בנאדמ");
        assert_eq!(normalize_hebrew("כל בן־אדם"), "כל בנאדמ");
    }

    #[test]
    fn other_maqqef_becomes_space() {
        assert_eq!(normalize_hebrew("כל־העם"), "כל העם");
        assert_eq!(normalize_hebrew("בן־דוד"), "בן דוד");
    }

    #[test]
    fn whole_word_overrides() {
        assert_eq!(normalize_hebrew("מלך"), "מלכ");
        assert_eq!(normalize_hebrew("שלום"), "שלומ");
        assert_eq!(normalize_hebrew("עולם"), "עולמ");
        assert_eq!(normalize_hebrew("המלך"), "המלכ");
    }

    #[test]
    fn general_final_letters() {
        assert_eq!(normalize_hebrew("ארץ"), "ארצ");
        assert_eq!(normalize_hebrew("כסף"), "כספ");
        assert_eq!(normalize_hebrew("דרך"), "דרכ");
    }

    #[test]
    fn final_nun_and_mem_kept_outside_overrides() {
        assert_eq!(normalize_hebrew("אדם"), "אדם");
        assert_eq!(normalize_hebrew("בן"), "בן");
        assert_eq!(normalize_hebrew("ירושלים"), "ירושלים");
    }

    #[test]
    fn punctuation_marks_do_not_survive() {
        assert!(!normalize_hebrew("סוף׃").contains('\u{05C3}'));
        assert!(!normalize_hebrew("א ׀ ב").contains('\u{05C0}'));
        assert!(!normalize_hebrew("א׆").contains('\u{05C6}'));
    }

    #[test]
    fn rewrite_is_stable() {
        for s in ["שָׁלוֹם עוֹלָם", "בֶּן־אָדָם", "ארץ ישראל", "מלך המלכים"] {
            let once = normalize_hebrew(s);
            assert_eq!(normalize_hebrew(&once), once, "input {s:?}");
        }
    }
}
