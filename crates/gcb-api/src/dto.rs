// SPDX-License-Identifier: Apache-2.0

use gcb_query::QueryPage;
use serde::{Deserialize, Serialize};

/// One page of records, the shape every list endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ListPageDto<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

impl<T> From<QueryPage<T>> for ListPageDto<T> {
    fn from(page: QueryPage<T>) -> Self {
        Self {
            items: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

/// Active/archived split of one collection under a single snapshot date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionStatsDto {
    pub total: usize,
    pub active: usize,
    pub archived: usize,
}

impl CollectionStatsDto {
    #[must_use]
    pub fn from_split((active, archived): (usize, usize)) -> Self {
        Self {
            total: active + archived,
            active,
            archived,
        }
    }
}

/// Body of `/v1/stats`. All five splits share one snapshot date so the
/// numbers cannot straddle midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct StatsResponseDto {
    pub as_of: String,
    pub cause_lists: CollectionStatsDto,
    pub notices: CollectionStatsDto,
    pub announcements: CollectionStatsDto,
    pub gazettes: CollectionStatsDto,
    pub bulletins: CollectionStatsDto,
}
