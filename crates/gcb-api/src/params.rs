use gcb_model::PublicationDate;
use gcb_query::{DateFilter, QueryParams, SortOrder};
use std::collections::BTreeMap;

/// Ceiling on `limit` when the deployment does not configure one.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Wire settings one list route carries: which query-string key holds the
/// kind's category filter, and the page size used when the client sends
/// none. The sizes mirror the published site's per-section page lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRoute {
    pub collection: &'static str,
    pub category_param: &'static str,
    pub default_limit: usize,
}

pub const CAUSE_LISTS_ROUTE: ListRoute = ListRoute {
    collection: "cause-lists",
    category_param: "courtType",
    default_limit: 8,
};

pub const NOTICES_ROUTE: ListRoute = ListRoute {
    collection: "notices",
    category_param: "type",
    default_limit: 8,
};

pub const ANNOUNCEMENTS_ROUTE: ListRoute = ListRoute {
    collection: "announcements",
    category_param: "category",
    default_limit: 5,
};

pub const GAZETTES_ROUTE: ListRoute = ListRoute {
    collection: "gazettes",
    category_param: "category",
    default_limit: 5,
};

pub const BULLETINS_ROUTE: ListRoute = ListRoute {
    collection: "bulletins",
    category_param: "category",
    default_limit: 8,
};

/// Builds engine parameters from a raw query string.
///
/// Recovers instead of rejecting: numbers that fail to parse fall back to
/// their defaults, an unrecognized `sortBy` keeps the stored order, and an
/// unparseable `date` fails closed to zero matches. List endpoints never
/// answer 400.
#[must_use]
pub fn parse_list_params(
    query: &BTreeMap<String, String>,
    route: ListRoute,
    max_limit: usize,
) -> QueryParams {
    QueryParams {
        page: positive_or(query.get("page"), 1),
        limit: positive_or(query.get("limit"), route.default_limit).min(max_limit.max(1)),
        search: query.get("search").cloned().unwrap_or_default(),
        date: parse_date_filter(query.get("date")),
        category: non_empty(query.get(route.category_param)),
        region: non_empty(query.get("region")),
        archived: query
            .get("archived")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")),
        sort: parse_sort(query.get("sortBy")),
    }
}

fn positive_or(raw: Option<&String>, fallback: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .filter(|&value| value >= 1)
        .unwrap_or(fallback)
}

fn non_empty(raw: Option<&String>) -> Option<String> {
    raw.filter(|value| !value.is_empty()).cloned()
}

fn parse_date_filter(raw: Option<&String>) -> DateFilter {
    match raw.map(String::as_str) {
        None | Some("") => DateFilter::None,
        Some(value) => match PublicationDate::parse(value) {
            Ok(date) => DateFilter::On(date.date()),
            Err(_) => DateFilter::Unmatchable,
        },
    }
}

fn parse_sort(raw: Option<&String>) -> SortOrder {
    match raw.map(String::as_str) {
        Some("newest") => SortOrder::Newest,
        Some("oldest") => SortOrder::Oldest,
        _ => SortOrder::Relevance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_query_takes_route_defaults() {
        let params = parse_list_params(&query(&[]), ANNOUNCEMENTS_ROUTE, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
        assert_eq!(params.search, "");
        assert_eq!(params.date, DateFilter::None);
        assert_eq!(params.category, None);
        assert!(!params.archived);
        assert_eq!(params.sort, SortOrder::Relevance);
    }

    #[test]
    fn category_is_read_from_the_route_key_only() {
        let q = query(&[("courtType", "High Court"), ("category", "ignored")]);
        let params = parse_list_params(&q, CAUSE_LISTS_ROUTE, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(params.category.as_deref(), Some("High Court"));

        let params = parse_list_params(&q, GAZETTES_ROUTE, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(params.category.as_deref(), Some("ignored"));
    }

    #[test]
    fn empty_filter_values_mean_no_filter() {
        let q = query(&[("region", ""), ("courtType", "")]);
        let params = parse_list_params(&q, CAUSE_LISTS_ROUTE, DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(params.region, None);
        assert_eq!(params.category, None);
    }
}
