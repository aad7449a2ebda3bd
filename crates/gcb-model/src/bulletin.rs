use crate::date::PublicationDate;
use crate::record::{parse_title, CatalogRecord, ParseError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One court bulletin issue. Bulletins carry no category tag, so category
/// filters never match them; `coverage` stands in for the region filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bulletin {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<String>,
    pub published_on: PublicationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Bulletin {
    pub fn new(
        id: RecordId,
        title: &str,
        issue_number: Option<String>,
        published_on: PublicationDate,
        coverage: Option<String>,
        summary: Option<String>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            id,
            title: parse_title(title)?,
            issue_number,
            published_on,
            coverage,
            summary,
        })
    }
}

impl CatalogRecord for Bulletin {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn published_on(&self) -> NaiveDate {
        self.published_on.date()
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn division(&self) -> Option<&str> {
        None
    }

    fn region(&self) -> Option<&str> {
        self.coverage.as_deref()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(summary) = &self.summary {
            fields.push(summary);
        }
        if let Some(coverage) = &self.coverage {
            fields.push(coverage);
        }
        if let Some(issue_number) = &self.issue_number {
            fields.push(issue_number);
        }
        fields
    }
}
