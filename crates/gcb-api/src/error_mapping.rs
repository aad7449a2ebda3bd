// SPDX-License-Identifier: Apache-2.0

use crate::errors::{ApiError, ApiErrorCode};

#[must_use]
pub fn http_status(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::RecordNotFound => 404,
        ApiErrorCode::NotReady => 503,
        ApiErrorCode::Internal => 500,
    }
}
