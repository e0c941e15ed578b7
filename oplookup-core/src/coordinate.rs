//! Secret coordinate parsing
//!
//! A coordinate is `<vault>/<item>/<field>`. Each segment is classified as an
//! identifier or a label when the coordinate is parsed.

use std::fmt;
use std::str::FromStr;

use crate::error::{LookupError, LookupResult};
use crate::identifier::Reference;

/// Separator between coordinate segments
pub const SEGMENT_SEPARATOR: char = '/';

/// A parsed `<vault>/<item>/<field>` coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// Vault reference
    pub vault: Reference,
    /// Item reference
    pub item: Reference,
    /// Field reference
    pub field: Reference,
}

impl Coordinate {
    /// Parses a coordinate string.
    ///
    /// Only the first three segments are significant; anything after the
    /// third separator is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MalformedCoordinate`] if the string splits into
    /// fewer than three segments.
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let mut segments = raw.split(SEGMENT_SEPARATOR);
        match (segments.next(), segments.next(), segments.next()) {
            (Some(vault), Some(item), Some(field)) => Ok(Self {
                vault: Reference::classify(vault),
                item: Reference::classify(item),
                field: Reference::classify(field),
            }),
            _ => Err(LookupError::MalformedCoordinate(raw.to_string())),
        }
    }

    /// Parses the single coordinate out of a batch of terms.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnsupportedBatch`] for more than one term and
    /// [`LookupError::MalformedCoordinate`] for none or a malformed one.
    pub fn from_terms<S: AsRef<str>>(terms: &[S]) -> LookupResult<Self> {
        match terms {
            [] => Err(LookupError::MalformedCoordinate(String::new())),
            [single] => Self::parse(single.as_ref()),
            many => Err(LookupError::UnsupportedBatch(many.len())),
        }
    }
}

impl FromStr for Coordinate {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.vault, self.item, self.field)
    }
}
