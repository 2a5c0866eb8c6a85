//! Normalizer
//!
//! Reduces raw text to the ordered subsequence of significant symbols.
//! Which symbols count is decided by a [`SymbolPredicate`]; the default is
//! the CJK Unified Ideographs block U+4E00..=U+9FA5.

use std::fmt;
use std::ops::{Deref, RangeInclusive};

use regex::Regex;

/// First code point of the default significant range.
pub const CJK_START: char = '\u{4E00}';
/// Last code point of the default significant range.
pub const CJK_END: char = '\u{9FA5}';

/// Membership test for significant symbols.
pub trait SymbolPredicate {
    fn is_significant(&self, c: char) -> bool;
}

impl<F> SymbolPredicate for F
where
    F: Fn(char) -> bool,
{
    fn is_significant(&self, c: char) -> bool {
        self(c)
    }
}

/// Configurable symbol predicate.
#[derive(Debug, Clone)]
pub enum SymbolFilter {
    /// Keep characters inside any of the inclusive ranges.
    Ranges(Vec<RangeInclusive<char>>),
    /// Keep characters whose single-char string matches the pattern.
    Pattern(Regex),
    /// Keep letters and digits of any script.
    Alphanumeric,
    /// Keep everything except whitespace.
    NonWhitespace,
}

impl SymbolFilter {
    pub fn cjk() -> Self {
        Self::Ranges(vec![CJK_START..=CJK_END])
    }

    /// Build a pattern filter, anchoring it so it tests exactly one character.
    pub fn pattern(class: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{})$", class)).map(Self::Pattern)
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Ranges(ranges) => ranges
                .iter()
                .map(|r| format!("U+{:04X}..=U+{:04X}", *r.start() as u32, *r.end() as u32))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Pattern(re) => format!("pattern {}", re.as_str()),
            Self::Alphanumeric => "alphanumeric".to_string(),
            Self::NonWhitespace => "non-whitespace".to_string(),
        }
    }
}

impl Default for SymbolFilter {
    fn default() -> Self {
        Self::cjk()
    }
}

impl SymbolPredicate for SymbolFilter {
    fn is_significant(&self, c: char) -> bool {
        match self {
            Self::Ranges(ranges) => ranges.iter().any(|r| r.contains(&c)),
            Self::Pattern(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
            Self::Alphanumeric => c.is_alphanumeric(),
            Self::NonWhitespace => !c.is_whitespace(),
        }
    }
}

/// Ordered, immutable sequence of significant symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedSequence(Vec<char>);

impl NormalizedSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl Deref for NormalizedSequence {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl FromIterator<char> for NormalizedSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for NormalizedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

/// Normalize with the default CJK filter.
///
/// ```
/// use simcheck::engine::normalize;
///
/// assert_eq!(normalize("Hello世界！123测试_").to_string(), "世界测试");
/// ```
pub fn normalize(text: &str) -> NormalizedSequence {
    normalize_with(text, &SymbolFilter::cjk())
}

pub fn normalize_with<P>(text: &str, predicate: &P) -> NormalizedSequence
where
    P: SymbolPredicate + ?Sized,
{
    text.chars().filter(|&c| predicate.is_significant(c)).collect()
}
