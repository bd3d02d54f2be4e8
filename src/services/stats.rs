//! Progress Aggregation
//!
//! Pure read-side computations over a page-collection snapshot: overall
//! and per-Juz' completion, per-status counts, review-due buckets, and
//! page filtering. No side effects, no persistence.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

use crate::models::juz::{JuzInfo, JUZ_TABLE};
use crate::models::page::{PageCollection, PageFilter, PageStatus, TOTAL_PAGES};

/// Number of pages in each explicit status.
///
/// NotStarted pages are implicit: absent records already default to it,
/// so the dashboard derives that count from the total when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub started: usize,
    pub partial: usize,
    pub memorized: usize,
}

/// Pages with a scheduled review, partitioned by due date.
///
/// Buckets are disjoint: a page appears in exactly one, or in none when
/// its review lies beyond the current week. All calendar arithmetic is
/// UTC; "this week" is the ISO-8601 week (Monday start) containing `now`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReviewBuckets {
    /// Reviews at or before `now`
    pub overdue: Vec<u16>,
    /// Reviews later today
    pub today: Vec<u16>,
    /// Reviews on the next calendar day
    pub tomorrow: Vec<u16>,
    /// Remaining reviews within the current ISO week
    pub this_week: Vec<u16>,
}

impl ReviewBuckets {
    /// Total pages across all buckets
    pub fn total(&self) -> usize {
        self.overdue.len() + self.today.len() + self.tomorrow.len() + self.this_week.len()
    }
}

/// Fraction of all pages fully memorized
pub fn overall_progress(collection: &PageCollection, total_pages: u16) -> f64 {
    if total_pages == 0 {
        return 0.0;
    }
    let memorized = collection
        .iter()
        .filter(|(_, record)| record.is_memorized())
        .count();
    memorized as f64 / total_pages as f64
}

/// Count pages in each explicit status
pub fn status_counts(collection: &PageCollection) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for (_, record) in collection.iter() {
        match record.status {
            PageStatus::Started => counts.started += 1,
            PageStatus::Partial => counts.partial += 1,
            PageStatus::Memorized => counts.memorized += 1,
            PageStatus::NotStarted => {}
        }
    }
    counts
}

/// Fraction of one Juz' section fully memorized
pub fn juz_progress(collection: &PageCollection, juz: &JuzInfo) -> f64 {
    let memorized = (juz.start..=juz.end)
        .filter(|&page| collection.status_of(page) == PageStatus::Memorized)
        .count();
    memorized as f64 / juz.page_count() as f64
}

/// Progress of every Juz' section, in section order
pub fn juz_progress_all(collection: &PageCollection) -> Vec<(&'static JuzInfo, f64)> {
    JUZ_TABLE
        .iter()
        .map(|juz| (juz, juz_progress(collection, juz)))
        .collect()
}

/// Partition pages with a scheduled review into due-date buckets
pub fn review_buckets(collection: &PageCollection, now: DateTime<Utc>) -> ReviewBuckets {
    let today = now.date_naive();
    let tomorrow = today + Duration::days(1);
    let week = today.iso_week();

    let mut buckets = ReviewBuckets::default();
    for (page, record) in collection.iter() {
        let Some(next_review) = record.next_review else {
            continue;
        };
        if next_review <= now {
            buckets.overdue.push(page);
            continue;
        }
        let review_date = next_review.date_naive();
        if review_date == today {
            buckets.today.push(page);
        } else if review_date == tomorrow {
            buckets.tomorrow.push(page);
        } else if review_date.iso_week() == week {
            buckets.this_week.push(page);
        }
    }
    buckets
}

/// Lazily iterate the page numbers matching a filter.
///
/// Covers all pages 1-604: a NotStarted filter matches pages with no
/// materialized record.
pub fn filter_pages(
    collection: &PageCollection,
    filter: PageFilter,
    now: DateTime<Utc>,
) -> impl Iterator<Item = u16> + '_ {
    (1..=TOTAL_PAGES).filter(move |&page| match filter {
        PageFilter::All => true,
        PageFilter::Status(status) => collection.status_of(page) == status,
        PageFilter::DueForReview => collection
            .get(page)
            .and_then(|record| record.next_review)
            .map(|next_review| next_review <= now)
            .unwrap_or(false),
    })
}
