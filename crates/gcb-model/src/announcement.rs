use crate::date::PublicationDate;
use crate::record::{parse_title, CatalogRecord, ParseError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Judicial service announcement. `category` is a free-form tag rather than
/// a closed enum; the original feed coins new ones ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub date: PublicationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub body: String,
}

impl Announcement {
    pub fn new(
        id: RecordId,
        title: &str,
        category: &str,
        date: PublicationDate,
        location: Option<String>,
        body: &str,
    ) -> Result<Self, ParseError> {
        if category.trim().is_empty() {
            return Err(ParseError::Empty("category"));
        }
        Ok(Self {
            id,
            title: parse_title(title)?,
            category: category.to_string(),
            date,
            location,
            body: body.to_string(),
        })
    }
}

impl CatalogRecord for Announcement {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn published_on(&self) -> NaiveDate {
        self.date.date()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn division(&self) -> Option<&str> {
        None
    }

    fn region(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.body.as_str()];
        if let Some(location) = &self.location {
            fields.push(location);
        }
        fields.push(&self.category);
        fields
    }
}
