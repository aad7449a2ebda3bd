// SPDX-License-Identifier: Apache-2.0

use crate::record::ParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Calendar date a record was published or is scheduled for.
///
/// Source feeds carry dates in several shapes ("2026-07-25", "25/07/2026",
/// "25th July 2026", "July 25, 2026"). All of them normalize to one
/// `NaiveDate` here, at ingestion, so the rest of the system only ever sees
/// ISO dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicationDate(NaiveDate);

impl PublicationDate {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty("date"));
        }
        // Timestamps only ever contribute their calendar date.
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        for format in ["%Y-%m-%d", "%d/%m/%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
                return Ok(Self(date));
            }
        }
        parse_long_form(trimmed)
            .map(Self)
            .ok_or_else(|| ParseError::InvalidDate(input.to_string()))
    }

    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl Display for PublicationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for PublicationDate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PublicationDate> for String {
    fn from(value: PublicationDate) -> Self {
        value.iso()
    }
}

/// "25th July 2026" and "July 25, 2026" both resolve here. Commas are
/// separators, day ordinals (st/nd/rd/th) are noise.
fn parse_long_form(input: &str) -> Option<NaiveDate> {
    let cleaned = input.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() != 3 {
        return None;
    }
    let (day_token, month_token) = if month_number(tokens[0].trim_end_matches('.')).is_some() {
        (tokens[1], tokens[0])
    } else {
        (tokens[0], tokens[1])
    };
    let day: u32 = strip_ordinal(day_token).parse().ok()?;
    let month = month_number(month_token.trim_end_matches('.'))?;
    let year: i32 = tokens[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn strip_ordinal(token: &str) -> &str {
    let lower = token.to_ascii_lowercase();
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(prefix) = lower.strip_suffix(suffix) {
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
                return &token[..prefix.len()];
            }
        }
    }
    token
}

fn month_number(token: &str) -> Option<u32> {
    match token.to_ascii_lowercase().as_str() {
        "january" | "jan" => Some(1),
        "february" | "feb" => Some(2),
        "march" | "mar" => Some(3),
        "april" | "apr" => Some(4),
        "may" => Some(5),
        "june" | "jun" => Some(6),
        "july" | "jul" => Some(7),
        "august" | "aug" => Some(8),
        "september" | "sept" | "sep" => Some(9),
        "october" | "oct" => Some(10),
        "november" | "nov" => Some(11),
        "december" | "dec" => Some(12),
        _ => None,
    }
}
