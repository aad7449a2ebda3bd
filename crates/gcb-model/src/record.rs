// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ID_MAX_LEN: usize = 64;
pub const TITLE_MAX_LEN: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidDate(String),
    UnknownLabel(&'static str, String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidDate(raw) => write!(f, "unrecognized date: {raw}"),
            Self::UnknownLabel(name, raw) => write!(f, "unknown {name}: {raw}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Opaque identifier of one published record, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RecordId(String);

impl RecordId {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("id"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("id"));
        }
        if input.len() > ID_MAX_LEN {
            return Err(ParseError::TooLong("id", ID_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-kind query descriptor: which fields of a record participate in which
/// filter. The query engine is generic over this trait, so every collection
/// shares one filter/sort/paginate path instead of re-rolling its own.
///
/// `category()` is the kind's exact-match tag (court type, notice type, …);
/// `division()` is the optional sub-tag that also satisfies a category
/// filter. Kinds without a tag return `None` and never match that filter.
pub trait CatalogRecord {
    fn record_id(&self) -> &RecordId;

    /// Calendar date the record occurred on. Drives date-exact filters,
    /// ordering, and the derived archived classification.
    fn published_on(&self) -> NaiveDate;

    fn category(&self) -> Option<&str>;

    fn division(&self) -> Option<&str>;

    fn region(&self) -> Option<&str>;

    /// Text fields participating in substring search, title first.
    fn search_haystacks(&self) -> Vec<&str>;
}

pub(crate) fn parse_title(input: &str) -> Result<String, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty("title"));
    }
    if input.len() > TITLE_MAX_LEN {
        return Err(ParseError::TooLong("title", TITLE_MAX_LEN));
    }
    Ok(input.to_string())
}
