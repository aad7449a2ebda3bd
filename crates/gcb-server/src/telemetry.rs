// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use gcb_store::StoreCounts;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

pub(crate) const METRIC_NAMESPACE: &str = "gcb";
pub(crate) const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-route request counters and latency samples, rendered as Prometheus
/// text by `/metrics`.
#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_insert_with(Vec::new)
            .push(latency.as_nanos() as u64);
    }

    /// Deterministic output: rows are sorted so two scrapes of identical
    /// state produce identical text.
    pub(crate) async fn render_prometheus(&self, store_counts: &StoreCounts) -> String {
        let mut body = String::new();
        for (collection, count) in [
            ("cause_lists", store_counts.cause_lists),
            ("notices", store_counts.notices),
            ("announcements", store_counts.announcements),
            ("gazettes", store_counts.gazettes),
            ("bulletins", store_counts.bulletins),
        ] {
            body.push_str(&format!(
                "{METRIC_NAMESPACE}_records_loaded{{version=\"{METRIC_VERSION}\",collection=\"{collection}\"}} {count}\n"
            ));
        }

        let mut counts: Vec<((String, u16), u64)> = {
            let lock = self.counts.lock().await;
            lock.iter().map(|(k, v)| (k.clone(), *v)).collect()
        };
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        for ((route, status), count) in counts {
            body.push_str(&format!(
                "{METRIC_NAMESPACE}_http_requests_total{{version=\"{METRIC_VERSION}\",route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }

        let mut latencies: Vec<(String, Vec<u64>)> = {
            let lock = self.latency_ns.lock().await;
            lock.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
        };
        latencies.sort_by(|a, b| a.0.cmp(&b.0));
        for (route, samples) in latencies {
            body.push_str(&format!(
                "{METRIC_NAMESPACE}_http_request_latency_p95_seconds{{version=\"{METRIC_VERSION}\",route=\"{route}\"}} {:.6}\n",
                percentile_ns(&samples, 0.95) as f64 / 1_000_000_000.0
            ));
        }
        body
    }
}

fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}
