// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    RecordNotFound,
    NotReady,
    Internal,
}

/// Wire error shape. Every non-2xx body is `{"error": <ApiError>}`.
///
/// List parameters are parsed defensively, so the only client-triggered
/// error is the detail 404; the rest signal service state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn record_not_found(collection: &str, id: &str) -> Self {
        Self {
            code: ApiErrorCode::RecordNotFound,
            message: format!("no such record in {collection}: {id}"),
            details: json!({"collection": collection, "id": id}),
        }
    }

    #[must_use]
    pub fn not_ready(reason: &str) -> Self {
        Self {
            code: ApiErrorCode::NotReady,
            message: "service is not ready".to_string(),
            details: json!({"reason": reason}),
        }
    }

    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::Internal,
            message: "internal error".to_string(),
            details: json!({"reason": reason.into()}),
        }
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
