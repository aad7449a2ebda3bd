// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

/// Runtime knobs for the HTTP surface. `main.rs` fills these from `GCB_*`
/// environment variables; the defaults serve a small deployment as-is.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    /// Ceiling for the `limit` query parameter across every list endpoint.
    pub max_page_size: usize,
    /// `max-age` on list/detail/stats responses.
    pub cache_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            max_page_size: gcb_api::DEFAULT_MAX_PAGE_SIZE,
            cache_ttl: Duration::from_secs(60),
        }
    }
}
