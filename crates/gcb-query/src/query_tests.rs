use super::*;
use gcb_model::{CauseList, CourtType, Notice, NoticeKind, PublicationDate, RecordId};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn today() -> NaiveDate {
    day(2026, 7, 1)
}

fn cause_list(
    id: &str,
    title: &str,
    court: CourtType,
    division: Option<&str>,
    region: &str,
    sitting: NaiveDate,
) -> CauseList {
    CauseList::new(
        RecordId::parse(id).expect("id"),
        title,
        court,
        division.map(str::to_string),
        region,
        PublicationDate::from_naive(sitting),
        if id == "cl-2" {
            Some("SUIT NO. CM/0141/2026".to_string())
        } else {
            None
        },
        None,
    )
    .expect("cause list")
}

fn notice(id: &str, title: &str, kind: NoticeKind, served: NaiveDate) -> Notice {
    Notice::new(
        RecordId::parse(id).expect("id"),
        title,
        kind,
        "High Court, Accra",
        None,
        PublicationDate::from_naive(served),
        None,
        None,
        None,
        "The court directs publication of this notice.",
    )
    .expect("notice")
}

/// Ten cause lists: six within the archive window of [`today`], four about
/// two years old. Two of the six active ones sit in Ashanti.
fn fixture() -> Vec<CauseList> {
    vec![
        cause_list(
            "cl-1",
            "Supreme Court Cause List",
            CourtType::SupremeCourt,
            None,
            "Greater Accra",
            day(2026, 6, 30),
        ),
        cause_list(
            "cl-2",
            "High Court (Commercial Division) Cause List",
            CourtType::HighCourt,
            Some("Commercial Division"),
            "Greater Accra",
            day(2026, 6, 28),
        ),
        cause_list(
            "cl-3",
            "Circuit Court Cause List, Kumasi",
            CourtType::CircuitCourt,
            None,
            "Ashanti",
            day(2026, 6, 25),
        ),
        cause_list(
            "cl-4",
            "District Court Cause List, Obuasi",
            CourtType::DistrictCourt,
            None,
            "Ashanti",
            day(2026, 6, 20),
        ),
        cause_list(
            "cl-5",
            "Court of Appeal Civil Cause List",
            CourtType::CourtOfAppeal,
            None,
            "Greater Accra",
            day(2026, 5, 15),
        ),
        cause_list(
            "cl-6",
            "High Court (Land Division) Cause List",
            CourtType::HighCourt,
            Some("Land Division"),
            "Northern",
            day(2026, 7, 3),
        ),
        cause_list(
            "cl-7",
            "Supreme Court Cause List",
            CourtType::SupremeCourt,
            None,
            "Greater Accra",
            day(2024, 6, 30),
        ),
        cause_list(
            "cl-8",
            "Circuit Court Cause List, Kumasi",
            CourtType::CircuitCourt,
            None,
            "Ashanti",
            day(2024, 6, 25),
        ),
        cause_list(
            "cl-9",
            "High Court Cause List",
            CourtType::HighCourt,
            None,
            "Volta",
            day(2024, 5, 20),
        ),
        cause_list(
            "cl-10",
            "District Court Cause List",
            CourtType::DistrictCourt,
            None,
            "Western",
            day(2024, 5, 10),
        ),
    ]
}

fn notices() -> Vec<Notice> {
    let mut out = vec![
        notice(
            "n-1",
            "In the Estate of Kofi Mensah (Deceased)",
            NoticeKind::EstateNotice,
            day(2026, 6, 1),
        ),
        notice(
            "n-2",
            "Estate of Ama Serwaa: Creditors to Come Forward",
            NoticeKind::EstateNotice,
            day(2026, 6, 8),
        ),
        notice(
            "n-3",
            "In the Estate of J. K. Boateng (Deceased)",
            NoticeKind::EstateNotice,
            day(2026, 6, 15),
        ),
    ];
    for (index, title) in [
        "Substituted Service on Yaw Darko",
        "Substituted Service on Akosua Nyame",
        "Public Notice: Court Vacation Dates",
        "Public Notice: Relocation of Registry",
        "General Notice: Revised Filing Fees",
        "General Notice: Call to the Bar Ceremony",
        "Practice Direction No. 1 of 2026",
        "Practice Direction No. 2 of 2026",
        "Public Notice: Annual Legal Year Service",
    ]
    .iter()
    .enumerate()
    {
        let kind = match index % 3 {
            0 => NoticeKind::SubstitutedService,
            1 => NoticeKind::PublicNotice,
            _ => NoticeKind::GeneralNotice,
        };
        out.push(notice(
            &format!("n-{}", index + 4),
            title,
            kind,
            day(2026, 5, 1 + index as u32),
        ));
    }
    out
}

fn ids<R: CatalogRecord>(page: &QueryPage<R>) -> Vec<String> {
    page.items
        .iter()
        .map(|record| record.record_id().as_str().to_string())
        .collect()
}

#[test]
fn default_active_page_returns_the_six_recent_lists() {
    let page = query(&fixture(), &QueryParams::default(), today());
    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 6);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 8);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn active_and_archived_partition_covers_every_record_once() {
    let records = fixture();
    let wide = QueryParams {
        limit: 100,
        ..Default::default()
    };
    let active = query(&records, &wide, today());
    let archived = query(
        &records,
        &QueryParams {
            archived: true,
            ..wide.clone()
        },
        today(),
    );
    assert_eq!(active.total + archived.total, records.len());
    let mut seen = ids(&active);
    seen.extend(ids(&archived));
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), records.len());
}

#[test]
fn archive_boundary_is_strictly_more_than_365_days() {
    let snapshot = today();
    let on_the_day = snapshot - chrono::Duration::days(ARCHIVE_WINDOW_DAYS);
    assert!(!is_archived(on_the_day, snapshot), "day 365 is still active");
    assert!(is_archived(
        on_the_day - chrono::Duration::days(1),
        snapshot
    ));
    assert!(!is_archived(snapshot, snapshot));
    // Future sittings are active too.
    assert!(!is_archived(snapshot + chrono::Duration::days(30), snapshot));
}

#[test]
fn region_filter_narrows_to_the_two_active_ashanti_lists() {
    let page = query(
        &fixture(),
        &QueryParams {
            region: Some("Ashanti".to_string()),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(page.total, 2);
    assert_eq!(ids(&page), vec!["cl-3", "cl-4"]);
}

#[test]
fn search_is_case_insensitive_and_counts_all_matches() {
    let records = notices();
    let lower = query(
        &records,
        &QueryParams {
            search: "estate".to_string(),
            limit: 20,
            ..Default::default()
        },
        today(),
    );
    assert_eq!(lower.total, 3);
    let upper = query(
        &records,
        &QueryParams {
            search: "ESTATE".to_string(),
            limit: 20,
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&upper), ids(&lower));
}

#[test]
fn search_reaches_suit_numbers() {
    let page = query(
        &fixture(),
        &QueryParams {
            search: "cm/0141".to_string(),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&page), vec!["cl-2"]);
}

#[test]
fn page_past_the_end_is_empty_not_an_error() {
    let page = query(
        &fixture(),
        &QueryParams {
            page: 5,
            ..Default::default()
        },
        today(),
    );
    assert!(page.items.is_empty());
    assert_eq!(page.total, 6);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 5);
}

#[test]
fn pagination_slices_are_exact() {
    let params = QueryParams {
        limit: 4,
        ..Default::default()
    };
    let first = query(&fixture(), &params, today());
    assert_eq!(first.items.len(), 4);
    assert_eq!(first.total_pages, 2);
    let second = query(
        &fixture(),
        &QueryParams {
            page: 2,
            ..params.clone()
        },
        today(),
    );
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.total, 6);
    let mut combined = ids(&first);
    combined.extend(ids(&second));
    combined.sort();
    combined.dedup();
    assert_eq!(combined.len(), 6, "pages must not overlap or drop records");
}

#[test]
fn newest_sorts_descending_and_oldest_ascending() {
    let newest = query(
        &fixture(),
        &QueryParams {
            sort: SortOrder::Newest,
            ..Default::default()
        },
        today(),
    );
    for pair in newest.items.windows(2) {
        assert!(pair[0].published_on() >= pair[1].published_on());
    }
    assert_eq!(newest.items[0].record_id().as_str(), "cl-6");

    let oldest = query(
        &fixture(),
        &QueryParams {
            sort: SortOrder::Oldest,
            ..Default::default()
        },
        today(),
    );
    for pair in oldest.items.windows(2) {
        assert!(pair[0].published_on() <= pair[1].published_on());
    }
    assert_eq!(oldest.items[0].record_id().as_str(), "cl-5");
}

#[test]
fn equal_dates_keep_their_stored_order_under_sort() {
    let records = vec![
        cause_list(
            "cl-a",
            "High Court Cause List A",
            CourtType::HighCourt,
            None,
            "Greater Accra",
            day(2026, 6, 10),
        ),
        cause_list(
            "cl-b",
            "High Court Cause List B",
            CourtType::HighCourt,
            None,
            "Greater Accra",
            day(2026, 6, 10),
        ),
        cause_list(
            "cl-c",
            "High Court Cause List C",
            CourtType::HighCourt,
            None,
            "Greater Accra",
            day(2026, 6, 12),
        ),
    ];
    let page = query(
        &records,
        &QueryParams {
            sort: SortOrder::Newest,
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&page), vec!["cl-c", "cl-a", "cl-b"]);
}

#[test]
fn relevance_is_a_pass_through_of_stored_order() {
    let page = query(&fixture(), &QueryParams::default(), today());
    assert_eq!(
        ids(&page),
        vec!["cl-1", "cl-2", "cl-3", "cl-4", "cl-5", "cl-6"]
    );
}

#[test]
fn date_filter_matches_the_exact_day_only() {
    let on = query(
        &fixture(),
        &QueryParams {
            date: DateFilter::On(day(2026, 6, 25)),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&on), vec!["cl-3"]);

    let unmatchable = query(
        &fixture(),
        &QueryParams {
            date: DateFilter::Unmatchable,
            ..Default::default()
        },
        today(),
    );
    assert_eq!(unmatchable.total, 0);
    assert_eq!(unmatchable.total_pages, 0);
    assert!(unmatchable.items.is_empty());
}

#[test]
fn category_filter_accepts_court_type_or_division() {
    let by_court = query(
        &fixture(),
        &QueryParams {
            category: Some("High Court".to_string()),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&by_court), vec!["cl-2", "cl-6"]);

    let by_division = query(
        &fixture(),
        &QueryParams {
            category: Some("Commercial Division".to_string()),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&by_division), vec!["cl-2"]);
}

#[test]
fn archived_view_applies_filters_after_the_partition() {
    let page = query(
        &fixture(),
        &QueryParams {
            archived: true,
            region: Some("Ashanti".to_string()),
            ..Default::default()
        },
        today(),
    );
    assert_eq!(ids(&page), vec!["cl-8"]);
}

#[test]
fn zero_page_and_zero_limit_fall_back_to_minimums() {
    let page = query(
        &fixture(),
        &QueryParams {
            page: 0,
            limit: 0,
            ..Default::default()
        },
        today(),
    );
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 6);
    assert_eq!(page.total_pages, 6);
}

#[test]
fn empty_collection_yields_an_empty_page() {
    let page = query(&Vec::<CauseList>::new(), &QueryParams::default(), today());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}

#[test]
fn identical_queries_agree_for_a_fixed_snapshot() {
    let records = fixture();
    let params = QueryParams {
        search: "cause".to_string(),
        sort: SortOrder::Newest,
        limit: 3,
        page: 2,
        ..Default::default()
    };
    let first = query(&records, &params, today());
    let second = query(&records, &params, today());
    assert_eq!(first, second);
}

#[test]
fn archive_split_agrees_with_the_partition_queries() {
    let records = fixture();
    let (active, archived) = archive_split(&records, today());
    assert_eq!(active, 6);
    assert_eq!(archived, 4);
}

#[test]
fn query_crate_has_no_http_dependency() {
    let cargo = std::fs::read_to_string(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"),
    )
    .expect("read Cargo.toml");
    for forbidden in ["axum", "gcb-server", "tokio"] {
        assert!(
            !cargo.contains(forbidden),
            "forbidden dependency in query crate: {forbidden}"
        );
    }
}
