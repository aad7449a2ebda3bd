// SPDX-License-Identifier: Apache-2.0

//! Raw JSON decoding and ingestion-time normalization. Dates arrive as
//! strings in whatever format the bulletins used; every record leaves here
//! with a canonical [`PublicationDate`] or not at all.

use crate::StoreError;
use gcb_model::{
    Announcement, Bulletin, CauseList, CourtType, Gazette, Notice, NoticeKind, PublicationDate,
    RecordId,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawCauseList {
    id: String,
    title: String,
    court_type: String,
    #[serde(default)]
    division: Option<String>,
    region: String,
    sitting_date: String,
    #[serde(default)]
    suit_number: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawNotice {
    id: String,
    title: String,
    notice_type: String,
    court: String,
    #[serde(default)]
    division: Option<String>,
    served_date: String,
    #[serde(default)]
    served_time: Option<String>,
    #[serde(default)]
    expiry_date: Option<String>,
    #[serde(default)]
    reference_number: Option<String>,
    content: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawAnnouncement {
    id: String,
    title: String,
    category: String,
    date: String,
    #[serde(default)]
    location: Option<String>,
    body: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawGazette {
    id: String,
    title: String,
    category: String,
    #[serde(default)]
    gazette_number: Option<String>,
    published_on: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawBulletin {
    id: String,
    title: String,
    #[serde(default)]
    issue_number: Option<String>,
    published_on: String,
    #[serde(default)]
    coverage: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

pub(crate) fn cause_lists(raw: &str, source: &str) -> Result<Vec<CauseList>, StoreError> {
    decode_collection(raw, source, "cause_lists", |value| {
        let raw: RawCauseList = serde_json::from_value(value).map_err(|e| e.to_string())?;
        CauseList::new(
            RecordId::parse(&raw.id).map_err(|e| e.to_string())?,
            &raw.title,
            CourtType::parse(&raw.court_type).map_err(|e| e.to_string())?,
            raw.division,
            &raw.region,
            PublicationDate::parse(&raw.sitting_date).map_err(|e| e.to_string())?,
            raw.suit_number,
            raw.description,
        )
        .map_err(|e| e.to_string())
    })
}

pub(crate) fn notices(raw: &str, source: &str) -> Result<Vec<Notice>, StoreError> {
    decode_collection(raw, source, "notices", |value| {
        let raw: RawNotice = serde_json::from_value(value).map_err(|e| e.to_string())?;
        let expiry = match raw.expiry_date {
            Some(text) => Some(PublicationDate::parse(&text).map_err(|e| e.to_string())?),
            None => None,
        };
        Notice::new(
            RecordId::parse(&raw.id).map_err(|e| e.to_string())?,
            &raw.title,
            NoticeKind::parse(&raw.notice_type).map_err(|e| e.to_string())?,
            &raw.court,
            raw.division,
            PublicationDate::parse(&raw.served_date).map_err(|e| e.to_string())?,
            raw.served_time,
            expiry,
            raw.reference_number,
            &raw.content,
        )
        .map_err(|e| e.to_string())
    })
}

pub(crate) fn announcements(raw: &str, source: &str) -> Result<Vec<Announcement>, StoreError> {
    decode_collection(raw, source, "announcements", |value| {
        let raw: RawAnnouncement = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Announcement::new(
            RecordId::parse(&raw.id).map_err(|e| e.to_string())?,
            &raw.title,
            &raw.category,
            PublicationDate::parse(&raw.date).map_err(|e| e.to_string())?,
            raw.location,
            &raw.body,
        )
        .map_err(|e| e.to_string())
    })
}

pub(crate) fn gazettes(raw: &str, source: &str) -> Result<Vec<Gazette>, StoreError> {
    decode_collection(raw, source, "gazettes", |value| {
        let raw: RawGazette = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Gazette::new(
            RecordId::parse(&raw.id).map_err(|e| e.to_string())?,
            &raw.title,
            &raw.category,
            raw.gazette_number,
            PublicationDate::parse(&raw.published_on).map_err(|e| e.to_string())?,
            raw.description,
        )
        .map_err(|e| e.to_string())
    })
}

pub(crate) fn bulletins(raw: &str, source: &str) -> Result<Vec<Bulletin>, StoreError> {
    decode_collection(raw, source, "bulletins", |value| {
        let raw: RawBulletin = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Bulletin::new(
            RecordId::parse(&raw.id).map_err(|e| e.to_string())?,
            &raw.title,
            raw.issue_number,
            PublicationDate::parse(&raw.published_on).map_err(|e| e.to_string())?,
            raw.coverage,
            raw.summary,
        )
        .map_err(|e| e.to_string())
    })
}

/// Decodes one collection document. The document itself must be a JSON
/// array; records inside it that fail validation are logged and dropped so
/// one bad entry cannot take the whole catalog down.
fn decode_collection<T>(
    raw: &str,
    source: &str,
    collection: &str,
    decode_one: impl Fn(Value) -> Result<T, String>,
) -> Result<Vec<T>, StoreError> {
    let values: Vec<Value> = serde_json::from_str(raw)
        .map_err(|e| StoreError(format!("{source}/{collection}: invalid JSON document: {e}")))?;
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let id_hint = value
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<missing id>")
            .to_string();
        match decode_one(value) {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!(
                    source,
                    collection,
                    index,
                    id = %id_hint,
                    %reason,
                    "skipping record that failed validation"
                );
            }
        }
    }
    Ok(records)
}
