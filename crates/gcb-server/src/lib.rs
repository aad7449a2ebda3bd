#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use gcb_store::ContentStore;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

mod config;
mod http;
mod telemetry;

pub const CRATE_NAME: &str = "gcb-server";

pub use config::ApiConfig;

use telemetry::RequestMetrics;

/// Shared handler state. The store is immutable after startup, so the only
/// mutable pieces are the readiness flags and the metrics sink.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub api: ApiConfig,
    pub ready: Arc<AtomicBool>,
    pub accepting_requests: Arc<AtomicBool>,
    pub(crate) metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<ContentStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            ready: Arc::new(AtomicBool::new(true)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::landing_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/readyz", get(http::handlers::readyz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/v1/version", get(http::handlers::version_handler))
        .route("/v1/stats", get(http::handlers::stats_handler))
        .route("/v1/cause-lists", get(http::handlers::cause_lists_handler))
        .route(
            "/v1/cause-lists/:id",
            get(http::handlers::cause_list_detail_handler),
        )
        .route("/v1/notices", get(http::handlers::notices_handler))
        .route(
            "/v1/notices/:id",
            get(http::handlers::notice_detail_handler),
        )
        .route(
            "/v1/announcements",
            get(http::handlers::announcements_handler),
        )
        .route(
            "/v1/announcements/:id",
            get(http::handlers::announcement_detail_handler),
        )
        .route("/v1/gazettes", get(http::handlers::gazettes_handler))
        .route(
            "/v1/gazettes/:id",
            get(http::handlers::gazette_detail_handler),
        )
        .route("/v1/bulletins", get(http::handlers::bulletins_handler))
        .route(
            "/v1/bulletins/:id",
            get(http::handlers::bulletin_detail_handler),
        )
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
