// SPDX-License-Identifier: Apache-2.0

use crate::dto::ListPageDto;
use crate::errors::ApiError;
use crate::params::{parse_list_params, ListRoute};
use chrono::NaiveDate;
use gcb_model::CatalogRecord;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Full list pipeline for one collection: defensive parse, engine query,
/// page DTO, JSON body.
pub fn run_list_query<R>(
    records: &[R],
    query: &BTreeMap<String, String>,
    route: ListRoute,
    max_limit: usize,
    today: NaiveDate,
) -> Result<Value, ApiError>
where
    R: CatalogRecord + Clone + Serialize,
{
    let params = parse_list_params(query, route, max_limit);
    let page = gcb_query::query(records, &params, today);
    serde_json::to_value(ListPageDto::from(page)).map_err(|e| ApiError::internal(e.to_string()))
}

/// Detail pipeline: the record in its own JSON shape, or the 404 envelope.
pub fn detail_response<R: Serialize>(
    record: Option<&R>,
    route: ListRoute,
    id: &str,
) -> Result<Value, ApiError> {
    match record {
        Some(found) => serde_json::to_value(found).map_err(|e| ApiError::internal(e.to_string())),
        None => Err(ApiError::record_not_found(route.collection, id)),
    }
}
