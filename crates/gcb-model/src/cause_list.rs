use crate::date::PublicationDate;
use crate::record::{parse_title, CatalogRecord, ParseError, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Court tier a cause list belongs to. Labels follow the published bulletins
/// verbatim; they double as the `courtType` filter values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum CourtType {
    #[serde(rename = "Supreme Court")]
    SupremeCourt,
    #[serde(rename = "Court of Appeal")]
    CourtOfAppeal,
    #[serde(rename = "High Court")]
    HighCourt,
    #[serde(rename = "Circuit Court")]
    CircuitCourt,
    #[serde(rename = "District Court")]
    DistrictCourt,
}

impl CourtType {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "Supreme Court" => Ok(Self::SupremeCourt),
            "Court of Appeal" => Ok(Self::CourtOfAppeal),
            "High Court" => Ok(Self::HighCourt),
            "Circuit Court" => Ok(Self::CircuitCourt),
            "District Court" => Ok(Self::DistrictCourt),
            _ => Err(ParseError::UnknownLabel("courtType", raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SupremeCourt => "Supreme Court",
            Self::CourtOfAppeal => "Court of Appeal",
            Self::HighCourt => "High Court",
            Self::CircuitCourt => "Circuit Court",
            Self::DistrictCourt => "District Court",
        }
    }
}

/// Cases listed for one court sitting on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CauseList {
    pub id: RecordId,
    pub title: String,
    pub court_type: CourtType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    pub region: String,
    pub sitting_date: PublicationDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CauseList {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        title: &str,
        court_type: CourtType,
        division: Option<String>,
        region: &str,
        sitting_date: PublicationDate,
        suit_number: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ParseError> {
        if region.trim().is_empty() {
            return Err(ParseError::Empty("region"));
        }
        Ok(Self {
            id,
            title: parse_title(title)?,
            court_type,
            division,
            region: region.to_string(),
            sitting_date,
            suit_number,
            description,
        })
    }
}

impl CatalogRecord for CauseList {
    fn record_id(&self) -> &RecordId {
        &self.id
    }

    fn published_on(&self) -> NaiveDate {
        self.sitting_date.date()
    }

    fn category(&self) -> Option<&str> {
        Some(self.court_type.as_str())
    }

    fn division(&self) -> Option<&str> {
        self.division.as_deref()
    }

    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields.push(&self.region);
        if let Some(division) = &self.division {
            fields.push(division);
        }
        if let Some(suit_number) = &self.suit_number {
            fields.push(suit_number);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CauseList {
        CauseList::new(
            RecordId::parse("cl-2026-014").unwrap(),
            "High Court (Commercial Division) Cause List",
            CourtType::HighCourt,
            Some("Commercial Division".to_string()),
            "Greater Accra",
            PublicationDate::parse("2026-07-20").unwrap(),
            Some("SUIT NO. CM/0141/2026".to_string()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn court_type_labels_round_trip() {
        for label in [
            "Supreme Court",
            "Court of Appeal",
            "High Court",
            "Circuit Court",
            "District Court",
        ] {
            assert_eq!(CourtType::parse(label).unwrap().as_str(), label);
        }
        assert!(matches!(
            CourtType::parse("Tribunal"),
            Err(ParseError::UnknownLabel("courtType", _))
        ));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["courtType"], "High Court");
        assert_eq!(json["sittingDate"], "2026-07-20");
        assert_eq!(json["suitNumber"], "SUIT NO. CM/0141/2026");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn haystacks_lead_with_title_and_skip_absent_fields() {
        let list = sample();
        let haystacks = list.search_haystacks();
        assert_eq!(haystacks[0], "High Court (Commercial Division) Cause List");
        assert!(haystacks.contains(&"Greater Accra"));
        assert!(haystacks.contains(&"SUIT NO. CM/0141/2026"));
        assert_eq!(haystacks.len(), 4);
    }

    #[test]
    fn rejects_blank_region() {
        let err = CauseList::new(
            RecordId::parse("cl-1").unwrap(),
            "Daily Cause List",
            CourtType::HighCourt,
            None,
            "  ",
            PublicationDate::parse("2026-01-05").unwrap(),
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, ParseError::Empty("region"));
    }
}
