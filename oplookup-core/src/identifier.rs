//! Identifier classification and label normalization
//!
//! Every coordinate segment is either a 1Password client UUID or a free-text
//! label. [`is_valid_identifier`] is the single branch point for that
//! decision; [`Reference`] records the outcome.
//!
//! A label that happens to look like an identifier is always treated as an
//! identifier. There is no fallback to label search.

use std::borrow::Cow;
use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Length of a 1Password client UUID
pub const IDENTIFIER_LENGTH: usize = 26;

/// Returns true if `token` has the shape of a 1Password client UUID.
///
/// A client UUID is exactly 26 characters, each an ASCII lowercase letter
/// or digit. Pure and total: never fails, no side effects.
#[must_use]
pub fn is_valid_identifier(token: &str) -> bool {
    token.len() == IDENTIFIER_LENGTH
        && token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Normalizes a label for comparison (Unicode NFKC).
///
/// Applied to both the query and every candidate so that composed and
/// decomposed spellings of the same text compare equal.
#[must_use]
pub fn normalize_label(label: &str) -> Cow<'_, str> {
    if label.is_ascii() {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(label.nfkc().collect())
    }
}

/// Returns true if two labels are equal after normalization
#[must_use]
pub fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a) == normalize_label(b)
}

/// A coordinate segment classified as identifier or label
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    /// A well-formed client UUID
    Id(String),
    /// A human-readable label
    Label(String),
}

impl Reference {
    /// Classifies a raw segment
    #[must_use]
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if is_valid_identifier(&raw) {
            Self::Id(raw)
        } else {
            Self::Label(raw)
        }
    }

    /// Returns the raw text of the reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id(s) | Self::Label(s) => s,
        }
    }

    /// Returns true for [`Reference::Id`]
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
