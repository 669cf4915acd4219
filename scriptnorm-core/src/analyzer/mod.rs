//! Text normalization pipeline.
//!
//! This module provides the normalization components:
//! - **Rules**: code-point sets and ordered rewrite steps
//! - **Language passes**: one fixed rule sequence per supported script
//! - **Generic**: lowercasing, punctuation, whitespace; always runs last
//! - **Normalizer**: dispatch by language and the `TextNormalizer` front end

pub mod arabic;
pub mod generic;
pub mod greek;
pub mod hebrew;
pub mod latin;
pub mod normalizer;
pub mod rules;
pub mod syriac;

pub use arabic::normalize_arabic;
pub use generic::{normalize_generic, normalize_generic_into, normalize_generic_opt};
pub use greek::normalize_greek;
pub use hebrew::normalize_hebrew;
pub use latin::normalize_latin;
pub use normalizer::{
    language_normalizer, normalize, normalize_opt, normalize_tagged, select_normalizer,
    NormalizeFn, NormalizerConfig, TextNormalizer,
};
pub use rules::{CharSet, Rule};
pub use syriac::normalize_syriac;

#[cfg(test)]
mod tests {
    use super::*;
    use scriptnorm_types::Language;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "\t\n  \r",
        "...!!!",
        "Hello, World!",
        "  Mixed   CASE  text  ",
        "مَرْحَباً بِالعَالَم",
        "أُمّة، إِسلام؟ مـــؤمن",
        "שָׁלוֹם עוֹלָם",
        "בֶּן־אָדָם מֶלֶךְ ארץ",
        "Γεῖα σου κόσμε",
        "ὁ λόγος; ΤΊ ΕΊΝΑΙ·",
        "Café résumé",
        "Ångström Façade AÑO",
        "ܫܠܵܡܵܐ ܥܵܠܡܵܐ",
        "ܐ\u{0700}ܒ\u{070F}ܓ",
        "İstanbul «Straße» ¿Qué?",
        "emoji 🌍 and\u{00A0}nbsp",
    ];

    fn all_languages() -> impl Iterator<Item = Option<Language>> {
        std::iter::once(None).chain(Language::ALL.into_iter().map(Some))
    }

    #[test]
    fn scenario_generic() {
        assert_eq!(normalize("Hello, World!", None), "hello world");
    }

    #[test]
    fn scenario_arabic() {
        assert_eq!(
            normalize("مَرْحَباً بِالعَالَم", Some(Language::Arabic)),
            "مرحبا بالعالم"
        );
    }

    #[test]
    fn scenario_hebrew() {
        assert_eq!(normalize("שָׁלוֹם עוֹלָם", Some(Language::Hebrew)), "שלומ עולמ");
        assert_eq!(normalize("מלך", Some(Language::Hebrew)), "מלכ");
        assert_eq!(normalize("ארץ", Some(Language::Hebrew)), "ארצ");
    }

    #[test]
    fn scenario_greek() {
        assert_eq!(
            normalize("Γεῖα σου κόσμε", Some(Language::Greek)),
            "γεια σου κοσμε"
        );
    }

    #[test]
    fn scenario_latin() {
        assert_eq!(normalize("Café résumé", Some(Language::Latin)), "cafe resume");
    }

    #[test]
    fn scenario_syriac() {
        assert_eq!(normalize("ܫܠܵܡܵܐ ܥܵܠܡܵܐ", Some(Language::Syriac)), "ܫܠܡܐ ܥܠܡܐ");
    }

    #[test]
    fn whitespace_only_is_empty_for_every_language() {
        for lang in all_languages() {
            for ws in ["", " ", "   ", "\t\n", "\u{3000}\u{00A0}"] {
                assert_eq!(normalize(ws, lang), "", "lang {lang:?} input {ws:?}");
            }
        }
    }

    #[test]
    fn language_punctuation_trimmed_by_generic_pass() {
        assert_eq!(normalize("ماذا؟", Some(Language::Arabic)), "ماذا");
        assert_eq!(normalize("τί;", Some(Language::Greek)), "τι");
        assert_eq!(normalize("ܐ\u{0704}", Some(Language::Syriac)), "ܐ");
        assert_eq!(normalize("כל־העם", Some(Language::Hebrew)), "כל העם");
    }

    #[test]
    fn idempotent_for_every_language() {
        for lang in all_languages() {
            for s in SAMPLES {
                let once = normalize(s, lang);
                let twice = normalize(&once, lang);
                assert_eq!(once, twice, "lang {lang:?} input {s:?}");
            }
        }
    }

    #[test]
    fn unknown_tag_equals_no_tag() {
        for s in SAMPLES {
            let untagged = normalize_tagged(s, None);
            for tag in ["xx", "", "EN", "latin"] {
                assert_eq!(normalize_tagged(s, Some(tag)), untagged, "tag {tag:?}");
            }
        }
    }

    #[test]
    fn tagged_matches_typed() {
        for lang in Language::ALL {
            for s in SAMPLES {
                assert_eq!(normalize_tagged(s, Some(lang.as_tag())), normalize(s, Some(lang)));
            }
        }
    }

    #[test]
    fn output_has_no_uppercase() {
        for lang in all_languages() {
            for s in SAMPLES {
                let out = normalize(s, lang);
                assert!(
                    !out.chars().any(char::is_uppercase),
                    "lang {lang:?} output {out:?}"
                );
            }
        }
    }

    #[test]
    fn output_never_has_edge_or_double_spaces() {
        for lang in all_languages() {
            for s in SAMPLES {
                let out = normalize(s, lang);
                assert!(!out.starts_with(' ') && !out.ends_with(' '), "{out:?}");
                assert!(!out.contains("  "), "{out:?}");
            }
        }
    }

    #[test]
    fn deterministic() {
        for lang in all_languages() {
            for s in SAMPLES {
                assert_eq!(normalize(s, lang), normalize(s, lang));
            }
        }
    }

    #[test]
    fn arbitrary_code_points_do_not_panic() {
        let soup: String = (0u32..0x3000)
            .step_by(7)
            .filter_map(char::from_u32)
            .collect();
        for lang in all_languages() {
            let _ = normalize(&soup, lang);
        }
    }
}
