#![forbid(unsafe_code)]

use chrono::NaiveDate;
use gcb_model::CatalogRecord;
use serde::{Deserialize, Serialize};

pub const CRATE_NAME: &str = "gcb-query";

/// Records older than this many whole days are archived. A record exactly
/// this old is still active.
pub const ARCHIVE_WINDOW_DAYS: i64 = 365;

pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SortOrder {
    /// Pass-through: survivors keep their stored order. Deliberately not a
    /// scoring sort.
    #[default]
    Relevance,
    Newest,
    Oldest,
}

/// Date-exact filter state. `Unmatchable` is the fail-closed form a caller
/// selects when the client supplied a date it could not parse: the query
/// still runs, it just matches nothing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DateFilter {
    #[default]
    None,
    On(NaiveDate),
    Unmatchable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryParams {
    /// 1-indexed; values below 1 behave as 1.
    pub page: usize,
    /// Page size; 0 behaves as 1.
    pub limit: usize,
    /// Case-insensitive substring over the kind's haystacks; empty matches
    /// everything.
    pub search: String,
    pub date: DateFilter,
    /// Exact match against a record's category tag, or its division as an
    /// alternate.
    pub category: Option<String>,
    pub region: Option<String>,
    /// Two-way partition, always applied first: `false` keeps active
    /// records, `true` keeps archived ones.
    pub archived: bool,
    pub sort: SortOrder,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            date: DateFilter::None,
            category: None,
            region: None,
            archived: false,
            sort: SortOrder::Relevance,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryPage<R> {
    pub items: Vec<R>,
    /// Survivor count across all pages.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[must_use]
pub fn is_archived(published: NaiveDate, today: NaiveDate) -> bool {
    today.signed_duration_since(published).num_days() > ARCHIVE_WINDOW_DAYS
}

/// Active/archived counts for one collection under a single snapshot date.
#[must_use]
pub fn archive_split<R: CatalogRecord>(records: &[R], today: NaiveDate) -> (usize, usize) {
    let archived = records
        .iter()
        .filter(|record| is_archived(record.published_on(), today))
        .count();
    (records.len() - archived, archived)
}

/// Runs one catalog query: archive partition, then search, date, category
/// and region filters, then sort, then one page slice.
///
/// Pure over `records`; deterministic for a fixed `today`. Callers capture
/// the snapshot date once per request so every stage of one query agrees on
/// what "now" is. A page past the end yields empty `items`, never an error.
#[must_use]
pub fn query<R>(records: &[R], params: &QueryParams, today: NaiveDate) -> QueryPage<R>
where
    R: CatalogRecord + Clone,
{
    let page = params.page.max(1);
    let limit = params.limit.max(1);
    let needle = params.search.to_lowercase();

    let mut survivors: Vec<&R> = records
        .iter()
        .filter(|record| is_archived(record.published_on(), today) == params.archived)
        .filter(|record| matches_search(*record, &needle))
        .filter(|record| matches_date(*record, params.date))
        .filter(|record| matches_category(*record, params.category.as_deref()))
        .filter(|record| matches_region(*record, params.region.as_deref()))
        .collect();

    // sort_by is stable: equal dates keep their filtered order.
    match params.sort {
        SortOrder::Newest => {
            survivors.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
        }
        SortOrder::Oldest => {
            survivors.sort_by(|a, b| a.published_on().cmp(&b.published_on()));
        }
        SortOrder::Relevance => {}
    }

    let total = survivors.len();
    let total_pages = total.div_ceil(limit);
    let offset = (page - 1).saturating_mul(limit);
    let items: Vec<R> = survivors.into_iter().skip(offset).take(limit).cloned().collect();

    QueryPage {
        items,
        total,
        page,
        limit,
        total_pages,
    }
}

fn matches_search<R: CatalogRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .search_haystacks()
        .iter()
        .any(|haystack| haystack.to_lowercase().contains(needle))
}

fn matches_date<R: CatalogRecord>(record: &R, filter: DateFilter) -> bool {
    match filter {
        DateFilter::None => true,
        DateFilter::On(date) => record.published_on() == date,
        DateFilter::Unmatchable => false,
    }
}

fn matches_category<R: CatalogRecord>(record: &R, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(tag) => record.category() == Some(tag) || record.division() == Some(tag),
    }
}

fn matches_region<R: CatalogRecord>(record: &R, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(place) => record.region() == Some(place),
    }
}

#[cfg(test)]
mod query_tests;
