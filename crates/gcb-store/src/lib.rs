#![forbid(unsafe_code)]

use gcb_model::{Announcement, Bulletin, CatalogRecord, CauseList, Gazette, Notice};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

mod decode;

pub const CRATE_NAME: &str = "gcb-store";

pub const CAUSE_LISTS_FILE: &str = "cause_lists.json";
pub const NOTICES_FILE: &str = "notices.json";
pub const ANNOUNCEMENTS_FILE: &str = "announcements.json";
pub const GAZETTES_FILE: &str = "gazettes.json";
pub const BULLETINS_FILE: &str = "bulletins.json";

#[derive(Debug)]
pub struct StoreError(pub String);

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub cause_lists: usize,
    pub notices: usize,
    pub announcements: usize,
    pub gazettes: usize,
    pub bulletins: usize,
}

impl StoreCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.cause_lists + self.notices + self.announcements + self.gazettes + self.bulletins
    }
}

/// All five record collections, loaded once and read-only afterwards.
///
/// Sources, in priority order: a data directory holding the five JSON files
/// named by the `*_FILE` constants, or the seed data compiled into the
/// binary. Individual records that fail validation are dropped with a
/// warning at load; structural problems (unreadable file, non-array JSON,
/// duplicate ids) fail the whole load.
#[derive(Debug)]
pub struct ContentStore {
    cause_lists: Vec<CauseList>,
    notices: Vec<Notice>,
    announcements: Vec<Announcement>,
    gazettes: Vec<Gazette>,
    bulletins: Vec<Bulletin>,
}

impl ContentStore {
    pub fn from_embedded_seed() -> Result<Self, StoreError> {
        Self::from_documents(
            include_str!("../data/cause_lists.json"),
            include_str!("../data/notices.json"),
            include_str!("../data/announcements.json"),
            include_str!("../data/gazettes.json"),
            include_str!("../data/bulletins.json"),
            "embedded seed",
        )
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, StoreError> {
        let read = |name: &str| -> Result<String, StoreError> {
            let path = dir.join(name);
            fs::read_to_string(&path)
                .map_err(|e| StoreError(format!("read {}: {e}", path.display())))
        };
        Self::from_documents(
            &read(CAUSE_LISTS_FILE)?,
            &read(NOTICES_FILE)?,
            &read(ANNOUNCEMENTS_FILE)?,
            &read(GAZETTES_FILE)?,
            &read(BULLETINS_FILE)?,
            &dir.display().to_string(),
        )
    }

    fn from_documents(
        cause_lists: &str,
        notices: &str,
        announcements: &str,
        gazettes: &str,
        bulletins: &str,
        source: &str,
    ) -> Result<Self, StoreError> {
        Self::from_records(
            decode::cause_lists(cause_lists, source)?,
            decode::notices(notices, source)?,
            decode::announcements(announcements, source)?,
            decode::gazettes(gazettes, source)?,
            decode::bulletins(bulletins, source)?,
        )
    }

    pub fn from_records(
        cause_lists: Vec<CauseList>,
        notices: Vec<Notice>,
        announcements: Vec<Announcement>,
        gazettes: Vec<Gazette>,
        bulletins: Vec<Bulletin>,
    ) -> Result<Self, StoreError> {
        ensure_unique_ids(&cause_lists, "cause_lists")?;
        ensure_unique_ids(&notices, "notices")?;
        ensure_unique_ids(&announcements, "announcements")?;
        ensure_unique_ids(&gazettes, "gazettes")?;
        ensure_unique_ids(&bulletins, "bulletins")?;
        Ok(Self {
            cause_lists,
            notices,
            announcements,
            gazettes,
            bulletins,
        })
    }

    #[must_use]
    pub fn cause_lists(&self) -> &[CauseList] {
        &self.cause_lists
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    #[must_use]
    pub fn gazettes(&self) -> &[Gazette] {
        &self.gazettes
    }

    #[must_use]
    pub fn bulletins(&self) -> &[Bulletin] {
        &self.bulletins
    }

    #[must_use]
    pub fn cause_list_by_id(&self, id: &str) -> Option<&CauseList> {
        find_by_id(&self.cause_lists, id)
    }

    #[must_use]
    pub fn notice_by_id(&self, id: &str) -> Option<&Notice> {
        find_by_id(&self.notices, id)
    }

    #[must_use]
    pub fn announcement_by_id(&self, id: &str) -> Option<&Announcement> {
        find_by_id(&self.announcements, id)
    }

    #[must_use]
    pub fn gazette_by_id(&self, id: &str) -> Option<&Gazette> {
        find_by_id(&self.gazettes, id)
    }

    #[must_use]
    pub fn bulletin_by_id(&self, id: &str) -> Option<&Bulletin> {
        find_by_id(&self.bulletins, id)
    }

    #[must_use]
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            cause_lists: self.cause_lists.len(),
            notices: self.notices.len(),
            announcements: self.announcements.len(),
            gazettes: self.gazettes.len(),
            bulletins: self.bulletins.len(),
        }
    }
}

fn find_by_id<'a, R: CatalogRecord>(records: &'a [R], id: &str) -> Option<&'a R> {
    records.iter().find(|record| record.record_id().as_str() == id)
}

fn ensure_unique_ids<R: CatalogRecord>(records: &[R], collection: &str) -> Result<(), StoreError> {
    let mut seen = BTreeSet::new();
    for record in records {
        if !seen.insert(record.record_id().as_str()) {
            return Err(StoreError(format!(
                "{collection}: duplicate record id {}",
                record.record_id()
            )));
        }
    }
    Ok(())
}
