//! Core types for the scriptnorm text normalizer.
//!
//! This crate holds the small vocabulary shared by every scriptnorm consumer:
//!
//! - **Language**: the closed set of scripts with dedicated normalization rules
//! - **ParseLanguageError**: returned by strict tag parsing
//!
//! It has no dependencies (serde support is behind the `serde` feature), so
//! callers can name languages in their own config types without pulling in
//! the rule engine.

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// A script with its own normalization rule set.
///
/// The set is closed: every variant maps to exactly one rule sequence in
/// `scriptnorm-core`, and anything that does not parse into a variant gets
/// the generic pass only.
///
/// `#[repr(u8)]` keeps the tag one byte wide for callers that store it
/// alongside indexed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Language {
    /// Arabic (`ar`): tashkeel, alef/yeh/waw variants, tatweel.
    #[cfg_attr(feature = "serde", serde(rename = "ar"))]
    Arabic = 0,
    /// Hebrew (`he`): nikud, te'amim, maqqef, final letters.
    #[cfg_attr(feature = "serde", serde(rename = "he"))]
    Hebrew = 1,
    /// Greek (`el`): polytonic accents, breathings, final sigma.
    #[cfg_attr(feature = "serde", serde(rename = "el"))]
    Greek = 2,
    /// Latin-based scripts (`la`): combining accents, cedilla, tilde.
    #[cfg_attr(feature = "serde", serde(rename = "la"))]
    Latin = 3,
    /// Syriac (`sy`): vowel points and sentence punctuation.
    #[cfg_attr(feature = "serde", serde(rename = "sy"))]
    Syriac = 4,
}

impl Language {
    /// Every supported language, in tag order.
    pub const ALL: [Language; 5] = [
        Language::Arabic,
        Language::Hebrew,
        Language::Greek,
        Language::Latin,
        Language::Syriac,
    ];

    /// Looks up a language by its short tag.
    ///
    /// Tags are matched exactly; `"AR"` or `" ar"` are not recognized.
    /// Returns `None` for anything else, including the empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use scriptnorm_types::Language;
    ///
    /// assert_eq!(Language::from_tag("he"), Some(Language::Hebrew));
    /// assert_eq!(Language::from_tag("xx"), None);
    /// ```
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ar" => Some(Language::Arabic),
            "he" => Some(Language::Hebrew),
            "el" => Some(Language::Greek),
            "la" => Some(Language::Latin),
            "sy" => Some(Language::Syriac),
            _ => None,
        }
    }

    /// Returns the short tag for this language.
    #[inline(always)]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Hebrew => "he",
            Language::Greek => "el",
            Language::Latin => "la",
            Language::Syriac => "sy",
        }
    }

    /// Returns the English name of the script.
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Hebrew => "Hebrew",
            Language::Greek => "Greek",
            Language::Latin => "Latin",
            Language::Syriac => "Syriac",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| ParseLanguageError {
            tag: s.to_owned(),
        })
    }
}

/// Error returned when a string is not one of the supported language tags.
///
/// Normalization itself never fails on an unknown tag (it falls back to the
/// generic pass). This error only surfaces from strict parsing, for callers
/// that want to reject bad configuration up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    tag: String,
}

impl ParseLanguageError {
    /// The tag that failed to parse.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported language tag: {:?} (expected one of ar, he, el, la, sy)",
            self.tag
        )
    }
}

impl core::error::Error for ParseLanguageError {}
