use crate::date::PublicationDate;
use crate::record::{parse_title, CatalogRecord, ParseError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One gazette issue ("Ordinary" or "Extraordinary" in current data).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Gazette {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazette_number: Option<String>,
    pub published_on: PublicationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Gazette {
    pub fn new(
        id: RecordId,
        title: &str,
        category: &str,
        gazette_number: Option<String>,
        published_on: PublicationDate,
        description: Option<String>,
    ) -> Result<Self, ParseError> {
        if category.trim().is_empty() {
            return Err(ParseError::Empty("category"));
        }
        Ok(Self {
            id,
            title: parse_title(title)?,
            category: category.to_string(),
            gazette_number,
            published_on,
            description,
        })
    }
}

impl CatalogRecord for Gazette {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn published_on(&self) -> NaiveDate {
        self.published_on.date()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn division(&self) -> Option<&str> {
        None
    }

    fn region(&self) -> Option<&str> {
        None
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        if let Some(gazette_number) = &self.gazette_number {
            fields.push(gazette_number);
        }
        fields
    }
}
