use crate::*;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use gcb_api::{
    detail_response, http_status, run_list_query, ApiError, CollectionStatsDto, ListRoute,
    StatsResponseDto, ANNOUNCEMENTS_ROUTE, BULLETINS_ROUTE, CAUSE_LISTS_ROUTE, GAZETTES_ROUTE,
    NOTICES_ROUTE,
};
use gcb_model::CatalogRecord;
use gcb_query::archive_split;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::info;

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(http_status(&err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = Json(json!({"error": err}));
    (status, body).into_response()
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

fn is_draining(state: &AppState) -> bool {
    !state.accepting_requests.load(Ordering::Relaxed)
}

async fn finish_request(
    state: &AppState,
    route: &str,
    status: StatusCode,
    started: Instant,
    request_id: &str,
) {
    let latency = started.elapsed();
    info!(
        request_id = %request_id,
        route = %route,
        status = status.as_u16(),
        latency_us = latency.as_micros() as u64,
        "request complete"
    );
    state.metrics.observe_request(route, status, latency).await;
}

/// Shared tail of every JSON data endpoint: etag from the body hash,
/// `if-none-match` short-circuit, cache headers, request-id echo.
async fn cached_json(
    state: &AppState,
    headers: &HeaderMap,
    request_id: &str,
    route: &str,
    payload: Value,
    started: Instant,
) -> Response {
    let etag = format!(
        "\"{}\"",
        sha256_hex(&serde_json::to_vec(&payload).unwrap_or_default())
    );
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), state.api.cache_ttl, &etag);
        finish_request(state, route, StatusCode::NOT_MODIFIED, started, request_id).await;
        return with_request_id(resp, request_id);
    }
    let mut response = Json(payload).into_response();
    put_cache_headers(response.headers_mut(), state.api.cache_ttl, &etag);
    finish_request(state, route, StatusCode::OK, started, request_id).await;
    with_request_id(response, request_id)
}

async fn refuse_draining(
    state: &AppState,
    route: &str,
    started: Instant,
    request_id: &str,
) -> Response {
    let resp = api_error_response(ApiError::not_ready("server draining; refusing new requests"));
    finish_request(
        state,
        route,
        StatusCode::SERVICE_UNAVAILABLE,
        started,
        request_id,
    )
    .await;
    with_request_id(resp, request_id)
}

/// One list endpoint: defensive parameter parse, engine query under a single
/// `today` snapshot, paged JSON with cache headers.
async fn list_collection<R>(
    state: &AppState,
    headers: &HeaderMap,
    params: &BTreeMap<String, String>,
    records: &[R],
    route: ListRoute,
) -> Response
where
    R: CatalogRecord + Clone + Serialize,
{
    let started = Instant::now();
    let request_id = propagated_request_id(headers, state);
    let metric_route = format!("/v1/{}", route.collection);
    if is_draining(state) {
        return refuse_draining(state, &metric_route, started, &request_id).await;
    }
    info!(request_id = %request_id, route = %metric_route, "request start");
    let today = Utc::now().date_naive();
    match run_list_query(records, params, route, state.api.max_page_size, today) {
        Ok(payload) => cached_json(state, headers, &request_id, &metric_route, payload, started).await,
        Err(err) => {
            let resp = api_error_response(err);
            let status = resp.status();
            finish_request(state, &metric_route, status, started, &request_id).await;
            with_request_id(resp, &request_id)
        }
    }
}

/// One detail endpoint: the record in its own JSON shape, or the 404
/// envelope naming collection and id.
async fn detail_for<R: Serialize>(
    state: &AppState,
    headers: &HeaderMap,
    record: Option<&R>,
    route: ListRoute,
    id: &str,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(headers, state);
    let metric_route = format!("/v1/{}/{{id}}", route.collection);
    if is_draining(state) {
        return refuse_draining(state, &metric_route, started, &request_id).await;
    }
    info!(request_id = %request_id, route = %metric_route, id = %id, "request start");
    match detail_response(record, route, id) {
        Ok(payload) => cached_json(state, headers, &request_id, &metric_route, payload, started).await,
        Err(err) => {
            let resp = api_error_response(err);
            let status = resp.status();
            finish_request(state, &metric_route, status, started, &request_id).await;
            with_request_id(resp, &request_id)
        }
    }
}

pub(crate) async fn cause_lists_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    list_collection(
        &state,
        &headers,
        &params,
        state.store.cause_lists(),
        CAUSE_LISTS_ROUTE,
    )
    .await
}

pub(crate) async fn cause_list_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    detail_for(
        &state,
        &headers,
        state.store.cause_list_by_id(&id),
        CAUSE_LISTS_ROUTE,
        &id,
    )
    .await
}

pub(crate) async fn notices_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    list_collection(&state, &headers, &params, state.store.notices(), NOTICES_ROUTE).await
}

pub(crate) async fn notice_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    detail_for(
        &state,
        &headers,
        state.store.notice_by_id(&id),
        NOTICES_ROUTE,
        &id,
    )
    .await
}

pub(crate) async fn announcements_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    list_collection(
        &state,
        &headers,
        &params,
        state.store.announcements(),
        ANNOUNCEMENTS_ROUTE,
    )
    .await
}

pub(crate) async fn announcement_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    detail_for(
        &state,
        &headers,
        state.store.announcement_by_id(&id),
        ANNOUNCEMENTS_ROUTE,
        &id,
    )
    .await
}

pub(crate) async fn gazettes_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    list_collection(
        &state,
        &headers,
        &params,
        state.store.gazettes(),
        GAZETTES_ROUTE,
    )
    .await
}

pub(crate) async fn gazette_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    detail_for(
        &state,
        &headers,
        state.store.gazette_by_id(&id),
        GAZETTES_ROUTE,
        &id,
    )
    .await
}

pub(crate) async fn bulletins_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> impl IntoResponse {
    list_collection(
        &state,
        &headers,
        &params,
        state.store.bulletins(),
        BULLETINS_ROUTE,
    )
    .await
}

pub(crate) async fn bulletin_detail_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    detail_for(
        &state,
        &headers,
        state.store.bulletin_by_id(&id),
        BULLETINS_ROUTE,
        &id,
    )
    .await
}

pub(crate) async fn stats_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    if is_draining(&state) {
        return refuse_draining(&state, "/v1/stats", started, &request_id).await;
    }
    info!(request_id = %request_id, route = "/v1/stats", "request start");
    // One snapshot date for all five splits so the counts cannot straddle
    // midnight.
    let today = Utc::now().date_naive();
    let dto = StatsResponseDto {
        as_of: today.to_string(),
        cause_lists: CollectionStatsDto::from_split(archive_split(
            state.store.cause_lists(),
            today,
        )),
        notices: CollectionStatsDto::from_split(archive_split(state.store.notices(), today)),
        announcements: CollectionStatsDto::from_split(archive_split(
            state.store.announcements(),
            today,
        )),
        gazettes: CollectionStatsDto::from_split(archive_split(state.store.gazettes(), today)),
        bulletins: CollectionStatsDto::from_split(archive_split(state.store.bulletins(), today)),
    };
    match serde_json::to_value(&dto) {
        Ok(payload) => cached_json(&state, &headers, &request_id, "/v1/stats", payload, started).await,
        Err(e) => {
            let resp = api_error_response(ApiError::internal(e.to_string()));
            let status = resp.status();
            finish_request(&state, "/v1/stats", status, started, &request_id).await;
            with_request_id(resp, &request_id)
        }
    }
}

pub(crate) async fn landing_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let counts = state.store.counts();
    let html = format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Ghana Court Bulletin</title></head><body>\
<h1>Ghana Court Bulletin</h1>\
<p>Version: <code>{}</code></p>\
<h2>Collections</h2>\
<ul>\
<li><a href=\"/v1/cause-lists\">/v1/cause-lists</a> ({} records)</li>\
<li><a href=\"/v1/notices\">/v1/notices</a> ({} records)</li>\
<li><a href=\"/v1/announcements\">/v1/announcements</a> ({} records)</li>\
<li><a href=\"/v1/gazettes\">/v1/gazettes</a> ({} records)</li>\
<li><a href=\"/v1/bulletins\">/v1/bulletins</a> ({} records)</li>\
</ul>\
<h2>Example Queries</h2>\
<ul>\
<li><a href=\"/v1/cause-lists?courtType=High%20Court&sortBy=newest\">/v1/cause-lists?courtType=High Court&amp;sortBy=newest</a></li>\
<li><a href=\"/v1/notices?search=estate&page=1\">/v1/notices?search=estate&amp;page=1</a></li>\
<li><a href=\"/v1/gazettes?archived=true\">/v1/gazettes?archived=true</a></li>\
<li><a href=\"/v1/stats\">/v1/stats</a></li>\
</ul>\
</body></html>",
        env!("CARGO_PKG_VERSION"),
        counts.cause_lists,
        counts.notices,
        counts.announcements,
        counts.gazettes,
        counts.bulletins,
    );
    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = StatusCode::OK;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    finish_request(&state, "/", StatusCode::OK, started, &request_id).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    finish_request(&state, "/healthz", StatusCode::OK, started, &request_id).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    if state.ready.load(Ordering::Relaxed) && !is_draining(&state) {
        let resp = (StatusCode::OK, "ready").into_response();
        finish_request(&state, "/readyz", StatusCode::OK, started, &request_id).await;
        with_request_id(resp, &request_id)
    } else {
        let reason = if is_draining(&state) {
            "draining"
        } else {
            "store not loaded"
        };
        let resp = api_error_response(ApiError::not_ready(reason));
        finish_request(
            &state,
            "/readyz",
            StatusCode::SERVICE_UNAVAILABLE,
            started,
            &request_id,
        )
        .await;
        with_request_id(resp, &request_id)
    }
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let payload = json!({
        "service": {
            "name": CRATE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "config_schema_version": crate::config::CONFIG_SCHEMA_VERSION,
        }
    });
    let mut response = Json(payload).into_response();
    if let Ok(value) = HeaderValue::from_str("public, max-age=30") {
        response.headers_mut().insert("cache-control", value);
    }
    finish_request(&state, "/v1/version", StatusCode::OK, started, &request_id).await;
    with_request_id(response, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let body = state
        .metrics
        .render_prometheus(&state.store.counts())
        .await;
    let resp = (StatusCode::OK, body).into_response();
    finish_request(&state, "/metrics", StatusCode::OK, started, &request_id).await;
    with_request_id(resp, &request_id)
}
