//! Language dispatch and the `TextNormalizer` front end.
//!
//! Every entry point here has the same shape: pick the language pass (or none),
//! run it, then run the generic pass on its output. An unknown or missing
//! language is not an error, it just means only the generic pass runs.

use std::borrow::Cow;

use scriptnorm_types::Language;
use tracing::trace;

use crate::analyzer::generic::normalize_generic_into;
use crate::analyzer::{arabic, greek, hebrew, latin, syriac};

/// A single language pass, without the generic pass.
pub type NormalizeFn = fn(&str) -> String;

fn identity(text: &str) -> String {
    text.to_owned()
}

/// Returns the language pass for `language`.
#[must_use]
pub fn language_normalizer(language: Language) -> NormalizeFn {
    match language {
        Language::Arabic => arabic::normalize_arabic,
        Language::Hebrew => hebrew::normalize_hebrew,
        Language::Greek => greek::normalize_greek,
        Language::Latin => latin::normalize_latin,
        Language::Syriac => syriac::normalize_syriac,
    }
}

/// Returns the language pass for a short tag, or the identity pass if the
/// tag is not recognized.
///
/// # Example
///
/// ```
/// use scriptnorm_core::analyzer::normalizer::select_normalizer;
///
/// assert_eq!(select_normalizer("la")("Café"), "Cafe");
/// assert_eq!(select_normalizer("xx")("Café"), "Café");
/// ```
#[must_use]
pub fn select_normalizer(tag: &str) -> NormalizeFn {
    match resolve_tag(tag) {
        Some(language) => language_normalizer(language),
        None => identity,
    }
}

fn resolve_tag(tag: &str) -> Option<Language> {
    let language = Language::from_tag(tag);
    if language.is_none() {
        trace!(tag, "unrecognized language tag, applying generic pass only");
    }
    language
}

/// Runs the language pass without copying when no rule fires.
#[inline]
fn rewrite(language: Language, text: &str) -> Cow<'_, str> {
    match language {
        Language::Arabic => arabic::rewrite(text),
        Language::Hebrew => hebrew::rewrite(text),
        Language::Greek => greek::rewrite(text),
        Language::Latin => latin::rewrite(text),
        Language::Syriac => syriac::rewrite(text),
    }
}

/// Full pipeline: language pass (if any), then the generic pass.
///
/// # Example
///
/// ```
/// use scriptnorm_core::analyzer::normalizer::normalize;
/// use scriptnorm_types::Language;
///
/// assert_eq!(normalize("Hello, World!", None), "hello world");
/// assert_eq!(normalize("Γεῖα σου κόσμε", Some(Language::Greek)), "γεια σου κοσμε");
/// ```
pub fn normalize(text: &str, language: Option<Language>) -> String {
    TextNormalizer::new(NormalizerConfig { language }).normalize(text)
}

/// Full pipeline keyed by a short tag. Unknown tags run the generic pass only.
pub fn normalize_tagged(text: &str, tag: Option<&str>) -> String {
    normalize(text, tag.and_then(resolve_tag))
}

/// Full pipeline over possibly-absent text. `None` passes through.
pub fn normalize_opt(text: Option<&str>, language: Option<Language>) -> Option<String> {
    text.map(|t| normalize(t, language))
}

/// Configuration for [`TextNormalizer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerConfig {
    /// Language pass to run before the generic pass. `None` runs only the
    /// generic pass.
    pub language: Option<Language>,
}

/// Search-text normalizer for one language.
///
/// Runs the language's rule sequence, then the generic pass:
/// lowercase, punctuation to spaces, whitespace collapsed, ends trimmed.
///
/// Holds no state besides its configuration, so a single instance can be
/// shared freely across threads.
///
/// # Examples
///
/// ```
/// use scriptnorm_core::analyzer::normalizer::TextNormalizer;
/// use scriptnorm_types::Language;
///
/// let generic = TextNormalizer::default();
/// assert_eq!(generic.normalize("  HELLO  WORLD  "), "hello world");
///
/// let hebrew = TextNormalizer::for_language(Language::Hebrew);
/// assert_eq!(hebrew.normalize("ארץ"), "ארצ");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a normalizer with the given configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer for `language`.
    pub const fn for_language(language: Language) -> Self {
        Self::new(NormalizerConfig {
            language: Some(language),
        })
    }

    /// Returns the configuration.
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing buffer.
    ///
    /// Clears `out` and reuses its capacity. The language pass only
    /// allocates when one of its rules actually changes the text.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        match self.config.language {
            Some(language) => {
                let rewritten = rewrite(language, input);
                normalize_generic_into(&rewritten, out);
            }
            None => normalize_generic_into(input, out),
        }
    }

    /// Normalizes text and returns a new `String`.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
