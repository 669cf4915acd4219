//! Multi-script text normalization for search.
//!
//! Folds away orthographic variation that should not affect matching:
//! diacritics and vowel points, letter-shape variants, punctuation, case and
//! whitespace. Supported scripts are Arabic, Hebrew, Greek, Latin-based and
//! Syriac; any other text still gets the generic pass.
//!
//! ```
//! use scriptnorm_core::{normalize, Language};
//!
//! assert_eq!(normalize("Café résumé", Some(Language::Latin)), "cafe resume");
//! assert_eq!(normalize("שָׁלוֹם", Some(Language::Hebrew)), "שלומ");
//! ```
//!
//! Every function here is a pure function of its input. Rule tables are
//! `static`, so normalizers can be called from any number of threads.

pub mod analyzer;

pub use analyzer::{normalize, normalize_opt, normalize_tagged, NormalizerConfig, TextNormalizer};
pub use scriptnorm_types::{Language, ParseLanguageError};
