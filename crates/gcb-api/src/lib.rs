#![forbid(unsafe_code)]
//! Wire boundary for the catalog service.
//!
//! Translates raw query strings into engine parameters (defensively: list
//! parameters recover to defaults rather than erroring), shapes engine
//! output into response DTOs, and owns the error envelope plus its HTTP
//! status mapping. HTTP framing itself lives in `gcb-server`.

mod dto;
mod error_mapping;
mod errors;
mod params;
mod wire;

pub use dto::{CollectionStatsDto, ListPageDto, StatsResponseDto};
pub use error_mapping::http_status;
pub use errors::{ApiError, ApiErrorCode};
pub use params::{
    parse_list_params, ListRoute, ANNOUNCEMENTS_ROUTE, BULLETINS_ROUTE, CAUSE_LISTS_ROUTE,
    DEFAULT_MAX_PAGE_SIZE, GAZETTES_ROUTE, NOTICES_ROUTE,
};
pub use wire::{detail_response, run_list_query};

pub const CRATE_NAME: &str = "gcb-api";
