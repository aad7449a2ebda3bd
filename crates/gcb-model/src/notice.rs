use crate::date::PublicationDate;
use crate::record::{parse_title, CatalogRecord, ParseError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Published notice categories. The `type` query parameter filters on these
/// labels exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum NoticeKind {
    #[serde(rename = "Estate Notice")]
    EstateNotice,
    #[serde(rename = "Substituted Service")]
    SubstitutedService,
    #[serde(rename = "Public Notice")]
    PublicNotice,
    #[serde(rename = "General Notice")]
    GeneralNotice,
    #[serde(rename = "Practice Direction")]
    PracticeDirection,
}

impl NoticeKind {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Estate Notice" => Ok(Self::EstateNotice),
            "Substituted Service" => Ok(Self::SubstitutedService),
            "Public Notice" => Ok(Self::PublicNotice),
            "General Notice" => Ok(Self::GeneralNotice),
            "Practice Direction" => Ok(Self::PracticeDirection),
            _ => Err(ParseError::UnknownLabel("noticeType", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EstateNotice => "Estate Notice",
            Self::SubstitutedService => "Substituted Service",
            Self::PublicNotice => "Public Notice",
            Self::GeneralNotice => "General Notice",
            Self::PracticeDirection => "Practice Direction",
        }
    }
}

/// A court notice as served or gazetted. `served_date` is the record's
/// calendar date; `served_time` and `expiry_date` ride along for display
/// and never participate in filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Notice {
    pub id: RecordId,
    pub title: String,
    pub notice_type: NoticeKind,
    pub court: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    pub served_date: PublicationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub served_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<PublicationDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    pub content: String,
}

impl Notice {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        title: &str,
        notice_type: NoticeKind,
        court: &str,
        division: Option<String>,
        served_date: PublicationDate,
        served_time: Option<String>,
        expiry_date: Option<PublicationDate>,
        reference_number: Option<String>,
        content: &str,
    ) -> Result<Self, ParseError> {
        if court.trim().is_empty() {
            return Err(ParseError::Empty("court"));
        }
        Ok(Self {
            id,
            title: parse_title(title)?,
            notice_type,
            court: court.to_string(),
            division,
            served_date,
            served_time,
            expiry_date,
            reference_number,
            content: content.to_string(),
        })
    }
}

impl CatalogRecord for Notice {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn published_on(&self) -> NaiveDate {
        self.served_date.date()
    }

    fn category(&self) -> Option<&str> {
        Some(self.notice_type.as_str())
    }

    fn division(&self) -> Option<&str> {
        self.division.as_deref()
    }

    fn region(&self) -> Option<&str> {
        Some(&self.court)
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str(), self.court.as_str()];
        if let Some(division) = &self.division {
            fields.push(division);
        }
        if let Some(reference_number) = &self.reference_number {
            fields.push(reference_number);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_kind_labels_round_trip() {
        for label in [
            "Estate Notice",
            "Substituted Service",
            "Public Notice",
            "General Notice",
            "Practice Direction",
        ] {
            assert_eq!(NoticeKind::parse(label).unwrap().as_str(), label);
        }
        assert!(matches!(
            NoticeKind::parse("estate notice"),
            Err(ParseError::UnknownLabel("noticeType", _))
        ));
    }

    #[test]
    fn auxiliary_fields_stay_out_of_the_calendar_date() {
        let notice = Notice::new(
            RecordId::parse("n-2026-009").unwrap(),
            "In the Estate of Kofi Mensah (Deceased)",
            NoticeKind::EstateNotice,
            "High Court, Accra",
            None,
            PublicationDate::parse("2026-06-30").unwrap(),
            Some("09:00".to_string()),
            Some(PublicationDate::parse("2026-09-30").unwrap()),
            Some("PROB/112/2026".to_string()),
            "All persons claiming against the estate should come forward.",
        )
        .unwrap();
        assert_eq!(notice.published_on().to_string(), "2026-06-30");
        let json = serde_json::to_value(&notice).unwrap();
        assert_eq!(json["servedTime"], "09:00");
        assert_eq!(json["expiryDate"], "2026-09-30");
        assert_eq!(json["noticeType"], "Estate Notice");
    }
}
