#![forbid(unsafe_code)]
//! Record model for the Ghana Court Bulletin catalog.
//!
//! Every published item normalizes its date into a [`PublicationDate`] at
//! construction time and exposes its queryable fields through
//! [`CatalogRecord`], the per-kind descriptor the query engine is generic
//! over.
//!
//! ```compile_fail
//! use gcb_model::CourtType;
//!
//! fn exhaustive_match(c: CourtType) -> &'static str {
//!     match c {
//!         CourtType::SupremeCourt => "sc",
//!         CourtType::CourtOfAppeal => "coa",
//!         CourtType::HighCourt => "hc",
//!         CourtType::CircuitCourt => "cc",
//!         CourtType::DistrictCourt => "dc",
//!     }
//! }
//! ```

mod announcement;
mod bulletin;
mod cause_list;
mod date;
mod gazette;
mod notice;
mod record;

pub use announcement::Announcement;
pub use bulletin::Bulletin;
pub use cause_list::{CauseList, CourtType};
pub use date::PublicationDate;
pub use gazette::Gazette;
pub use notice::{Notice, NoticeKind};
pub use record::{CatalogRecord, ParseError, RecordId, ID_MAX_LEN, TITLE_MAX_LEN};

pub const CRATE_NAME: &str = "gcb-model";
