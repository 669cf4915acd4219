//! Rule primitives shared by the language passes.
//!
//! A language pass is nothing more than a `&'static [Rule]` run front to back.
//! Each rule takes the output of the previous one, so order matters: a literal
//! rewrite that needs to see a mark has to run before the rule that deletes it.
//!
//! Rules work on `Cow<str>` so a pass over text it doesn't touch never copies.

use std::borrow::Cow;
use std::ops::RangeInclusive;

use memchr::memmem;
use unicode_normalization::{is_nfd_quick, IsNormalized, UnicodeNormalization};

/// Combining Diacritical Marks block, stripped after decomposition.
pub(crate) const COMBINING_MARKS: &[RangeInclusive<char>] = &['\u{0300}'..='\u{036F}'];

/// A set of code points, stored as inclusive ranges.
///
/// Single code points are written as one-element ranges (`'x'..='x'`).
/// Sets are small (a handful of ranges), so lookup is a linear scan.
#[derive(Debug, Clone, Copy)]
pub struct CharSet {
    ranges: &'static [RangeInclusive<char>],
}

impl CharSet {
    /// Creates a set from a static list of ranges.
    pub const fn new(ranges: &'static [RangeInclusive<char>]) -> Self {
        Self { ranges }
    }

    /// Returns true if `c` falls in any of the ranges.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(&c))
    }
}

/// One step of a language pass.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Replace every code point in `set` with `replacement` (may be empty).
    Chars {
        /// Code points to match.
        set: CharSet,
        /// Literal text written in place of each match.
        replacement: &'static str,
    },
    /// Replace every non-overlapping occurrence of `pattern`, left to right.
    Literal {
        /// Substring to match.
        pattern: &'static str,
        /// Literal text written in place of each match.
        replacement: &'static str,
    },
    /// Unicode lowercasing.
    Lowercase,
    /// Canonical decomposition (NFD).
    Decompose,
}

impl Rule {
    /// Shorthand for a code-point rule.
    pub const fn chars(
        ranges: &'static [RangeInclusive<char>],
        replacement: &'static str,
    ) -> Self {
        Rule::Chars {
            set: CharSet::new(ranges),
            replacement,
        }
    }

    /// Shorthand for a code-point deletion.
    pub const fn delete(ranges: &'static [RangeInclusive<char>]) -> Self {
        Self::chars(ranges, "")
    }

    /// Shorthand for a literal substring rewrite.
    pub const fn literal(pattern: &'static str, replacement: &'static str) -> Self {
        Rule::Literal {
            pattern,
            replacement,
        }
    }

    /// Applies this rule, borrowing through when nothing matches.
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match *self {
            Rule::Chars { set, replacement } => replace_chars(text, set, replacement),
            Rule::Literal {
                pattern,
                replacement,
            } => replace_literal(text, pattern, replacement),
            Rule::Lowercase => lowercase(text),
            Rule::Decompose => decompose(text),
        }
    }
}

/// Runs `rules` in order over `text`.
#[inline]
pub fn apply_rules<'a>(rules: &[Rule], text: &'a str) -> Cow<'a, str> {
    rules
        .iter()
        .fold(Cow::Borrowed(text), |acc, rule| rule.apply(acc))
}

fn replace_chars<'a>(text: Cow<'a, str>, set: CharSet, replacement: &str) -> Cow<'a, str> {
    let Some(first) = text.find(|c| set.contains(c)) else {
        return text;
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if set.contains(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn replace_literal<'a>(text: Cow<'a, str>, pattern: &str, replacement: &str) -> Cow<'a, str> {
    if pattern.is_empty() || memmem::find(text.as_bytes(), pattern.as_bytes()).is_none() {
        return text;
    }

    // Matches of a valid UTF-8 needle always start and end on char boundaries.
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for start in memmem::find_iter(text.as_bytes(), pattern.as_bytes()) {
        out.push_str(&text[last..start]);
        out.push_str(replacement);
        last = start + pattern.len();
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

fn lowercase(text: Cow<'_, str>) -> Cow<'_, str> {
    if text.is_ascii() && !text.bytes().any(|b| b.is_ascii_uppercase()) {
        return text;
    }
    Cow::Owned(text.to_lowercase())
}

fn decompose(text: Cow<'_, str>) -> Cow<'_, str> {
    match is_nfd_quick(text.chars()) {
        IsNormalized::Yes => text,
        IsNormalized::No | IsNormalized::Maybe => Cow::Owned(text.nfd().collect()),
    }
}
