//! Page Models
//!
//! Per-page memorization state: status enum, page record, and the
//! page-number-keyed collection owned by the progress service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed page count of the tracked text
pub const TOTAL_PAGES: u16 = 604;

/// Coarse memorization stage of a page.
///
/// Serialized as its numeric code (0-3) to stay compatible with exported
/// backup documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum PageStatus {
    #[default]
    NotStarted,
    Started,
    Partial,
    Memorized,
}

impl PageStatus {
    /// The next status in the click cycle (wraps Memorized back to NotStarted)
    pub fn next(self) -> Self {
        match self {
            PageStatus::NotStarted => PageStatus::Started,
            PageStatus::Started => PageStatus::Partial,
            PageStatus::Partial => PageStatus::Memorized,
            PageStatus::Memorized => PageStatus::NotStarted,
        }
    }

    /// Display label for dashboards
    pub fn label(&self) -> &'static str {
        match self {
            PageStatus::NotStarted => "Not Memorized",
            PageStatus::Started => "Started",
            PageStatus::Partial => "Partial",
            PageStatus::Memorized => "Memorized",
        }
    }
}

impl From<PageStatus> for u8 {
    fn from(status: PageStatus) -> u8 {
        match status {
            PageStatus::NotStarted => 0,
            PageStatus::Started => 1,
            PageStatus::Partial => 2,
            PageStatus::Memorized => 3,
        }
    }
}

impl TryFrom<u8> for PageStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PageStatus::NotStarted),
            1 => Ok(PageStatus::Started),
            2 => Ok(PageStatus::Partial),
            3 => Ok(PageStatus::Memorized),
            other => Err(format!("invalid status code: {}", other)),
        }
    }
}

impl std::fmt::Display for PageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Memorization state of a single page.
///
/// Field names and value formats match the backup document layout:
/// camelCase keys, numeric status, RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    /// Coarse memorization stage
    pub status: PageStatus,
    /// Fine-grained completion depth within the current status (0-100)
    pub percentage: u8,
    /// Timestamp of the last mutation to this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Next scheduled review; present once the page has been memorized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
    /// Successful review confirmations since last entering Memorized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl PageRecord {
    /// Whether the page is fully memorized
    pub fn is_memorized(&self) -> bool {
        self.status == PageStatus::Memorized
    }
}

/// Sparse mapping from page number to page record.
///
/// A missing key means the default record (NotStarted, 0%). Only the
/// progress service mutates a collection; aggregation reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PageCollection(BTreeMap<u16, PageRecord>);

impl PageCollection {
    /// Create an empty collection (every page implicitly NotStarted)
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the stored record for a page, if one has been materialized
    pub fn get(&self, page: u16) -> Option<&PageRecord> {
        self.0.get(&page)
    }

    /// Get the effective record for a page, defaulting when absent
    pub fn effective(&self, page: u16) -> PageRecord {
        self.0.get(&page).cloned().unwrap_or_default()
    }

    /// Get the effective status for a page (absent means NotStarted)
    pub fn status_of(&self, page: u16) -> PageStatus {
        self.0.get(&page).map(|r| r.status).unwrap_or_default()
    }

    /// Insert or replace the record for a page
    pub fn insert(&mut self, page: u16, record: PageRecord) {
        self.0.insert(page, record);
    }

    /// Remove every record, returning to the fully-sparse empty state
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of materialized records
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no record has been materialized
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over materialized (page, record) pairs in page order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &PageRecord)> {
        self.0.iter().map(|(page, record)| (*page, record))
    }
}

impl FromIterator<(u16, PageRecord)> for PageCollection {
    fn from_iter<I: IntoIterator<Item = (u16, PageRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Page selection criteria for list views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFilter {
    /// Every page
    All,
    /// Pages whose effective status equals the given one
    Status(PageStatus),
    /// Pages whose next review is due (nextReview <= now)
    DueForReview,
}

impl std::str::FromStr for PageFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PageFilter::All),
            "review" => Ok(PageFilter::DueForReview),
            code => {
                let code: u8 = code
                    .parse()
                    .map_err(|_| format!("unknown filter: {}", code))?;
                Ok(PageFilter::Status(PageStatus::try_from(code)?))
            }
        }
    }
}
