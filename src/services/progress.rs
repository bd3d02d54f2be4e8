//! Progress Service
//!
//! Single source of truth for all page records. Enforces the page and
//! percentage invariants, applies status transitions and review
//! confirmations, and durably persists every mutation through the
//! injected state store before returning.

use chrono::{DateTime, Utc};

use crate::models::page::{PageCollection, PageRecord, PageStatus, TOTAL_PAGES};
use crate::models::review::next_review_date;
use crate::storage::store::StateStore;
use crate::utils::error::{AppError, AppResult};

/// Storage key prefix for page records
const PAGE_KEY_PREFIX: &str = "page:";

/// Storage key for a page record
fn page_key(page: u16) -> String {
    format!("{}{}", PAGE_KEY_PREFIX, page)
}

/// Owns the page collection and the persistence of its mutations
pub struct ProgressService<S: StateStore> {
    store: S,
    pages: PageCollection,
}

impl<S: StateStore> ProgressService<S> {
    /// Create the service, loading previously persisted page records.
    ///
    /// Undecodable rows are skipped with a warning rather than failing
    /// startup; the affected pages fall back to the default record.
    pub fn new(store: S) -> AppResult<Self> {
        let mut pages = PageCollection::new();
        for page in 1..=TOTAL_PAGES {
            if let Some(raw) = store.load(&page_key(page))? {
                match serde_json::from_str::<PageRecord>(&raw) {
                    Ok(record) => pages.insert(page, record),
                    Err(e) => {
                        tracing::warn!("Skipping undecodable record for page {}: {}", page, e);
                    }
                }
            }
        }
        Ok(Self { store, pages })
    }

    /// Read-only view of the current collection
    pub fn snapshot(&self) -> &PageCollection {
        &self.pages
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Advance or set the status of a page.
    ///
    /// With no explicit status the page cycles to the next stage
    /// (Memorized wraps to NotStarted). The percentage defaults to 100 on
    /// Memorized, 0 on NotStarted, and is otherwise carried over unless
    /// given explicitly. Entering Memorized from any other status resets
    /// the review schedule.
    pub fn advance_status(
        &mut self,
        page: u16,
        status: Option<PageStatus>,
        percentage: Option<u8>,
    ) -> AppResult<PageRecord> {
        self.advance_status_at(page, status, percentage, Utc::now())
    }

    fn advance_status_at(
        &mut self,
        page: u16,
        explicit_status: Option<PageStatus>,
        explicit_percentage: Option<u8>,
        now: DateTime<Utc>,
    ) -> AppResult<PageRecord> {
        check_page(page)?;
        if let Some(pct) = explicit_percentage {
            check_percentage(pct)?;
        }

        let current = self.pages.effective(page);
        let new_status = explicit_status.unwrap_or_else(|| current.status.next());
        let record = apply_status(&current, new_status, explicit_percentage, now);

        tracing::debug!("Page {} -> {} ({}%)", page, record.status, record.percentage);
        self.persist(page, record)
    }

    /// Set the completion percentage of a page without changing its status
    pub fn set_percentage(&mut self, page: u16, percentage: u8) -> AppResult<PageRecord> {
        self.set_percentage_at(page, percentage, Utc::now())
    }

    fn set_percentage_at(
        &mut self,
        page: u16,
        percentage: u8,
        now: DateTime<Utc>,
    ) -> AppResult<PageRecord> {
        check_page(page)?;
        check_percentage(percentage)?;

        let mut record = self.pages.effective(page);
        record.percentage = percentage;
        record.last_modified = Some(now);
        self.persist(page, record)
    }

    /// Confirm a completed review of a memorized page.
    ///
    /// Increments the review count and schedules the next review from the
    /// incremented count. Only valid while the page is Memorized.
    pub fn confirm_review(&mut self, page: u16) -> AppResult<PageRecord> {
        self.confirm_review_at(page, Utc::now())
    }

    fn confirm_review_at(&mut self, page: u16, now: DateTime<Utc>) -> AppResult<PageRecord> {
        check_page(page)?;

        let mut record = self.pages.effective(page);
        if !record.is_memorized() {
            return Err(AppError::invalid_state(format!(
                "page {} is not memorized ({})",
                page, record.status
            )));
        }

        let count = record.review_count.unwrap_or(0) + 1;
        record.review_count = Some(count);
        record.next_review = Some(next_review_date(count, now));
        record.last_modified = Some(now);

        tracing::debug!("Page {} reviewed ({} reviews)", page, count);
        self.persist(page, record)
    }

    /// Apply one status to every page in an inclusive range.
    ///
    /// Each page is evaluated against its own prior record: percentage
    /// defaulting and the review-schedule reset follow the same rules as
    /// `advance_status`. Persistence is per page; a mid-range failure
    /// leaves earlier pages committed. Returns the number of pages set.
    pub fn batch_set_status(
        &mut self,
        start: u16,
        end: u16,
        status: PageStatus,
    ) -> AppResult<usize> {
        self.batch_set_status_at(start, end, status, Utc::now())
    }

    fn batch_set_status_at(
        &mut self,
        start: u16,
        end: u16,
        status: PageStatus,
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        if start < 1 || end > TOTAL_PAGES || start > end {
            return Err(AppError::invalid_range(format!(
                "pages {}-{} (valid: 1-{}, start <= end)",
                start, end, TOTAL_PAGES
            )));
        }

        for page in start..=end {
            let current = self.pages.effective(page);
            let record = apply_status(&current, status, None, now);
            self.persist(page, record)?;
        }

        let count = (end - start + 1) as usize;
        tracing::info!("Batch set pages {}-{} to {} ({} pages)", start, end, status, count);
        Ok(count)
    }

    /// Remove every page record; idempotent
    pub fn clear_all(&mut self) -> AppResult<()> {
        self.store.remove_prefix(PAGE_KEY_PREFIX)?;
        self.pages.clear();
        tracing::info!("Cleared all page records");
        Ok(())
    }

    /// Replace the whole collection (used by import).
    ///
    /// Previously persisted page keys are cleared first so the
    /// replacement is wholesale; no per-record validation happens here.
    pub fn replace_all(&mut self, pages: PageCollection) -> AppResult<()> {
        self.store.remove_prefix(PAGE_KEY_PREFIX)?;
        for (page, record) in pages.iter() {
            let raw = serde_json::to_string(record)?;
            self.store.save(&page_key(page), &raw)?;
        }
        tracing::info!("Replaced collection ({} records)", pages.len());
        self.pages = pages;
        Ok(())
    }

    /// Persist one record and install it in the collection
    fn persist(&mut self, page: u16, record: PageRecord) -> AppResult<PageRecord> {
        let raw = serde_json::to_string(&record)?;
        self.store.save(&page_key(page), &raw)?;
        self.pages.insert(page, record.clone());
        Ok(record)
    }
}

/// Compute the record resulting from a status change against the prior record
fn apply_status(
    current: &PageRecord,
    status: PageStatus,
    explicit_percentage: Option<u8>,
    now: DateTime<Utc>,
) -> PageRecord {
    let percentage = explicit_percentage.unwrap_or(match status {
        PageStatus::Memorized => 100,
        PageStatus::NotStarted => 0,
        _ => current.percentage,
    });

    let mut record = PageRecord {
        status,
        percentage,
        last_modified: Some(now),
        next_review: current.next_review,
        review_count: current.review_count,
    };

    if status == PageStatus::Memorized && current.status != PageStatus::Memorized {
        record.review_count = Some(0);
        record.next_review = Some(next_review_date(0, now));
    }

    record
}

fn check_page(page: u16) -> AppResult<()> {
    if (1..=TOTAL_PAGES).contains(&page) {
        Ok(())
    } else {
        Err(AppError::invalid_page(format!(
            "page {} outside 1-{}",
            page, TOTAL_PAGES
        )))
    }
}

fn check_percentage(percentage: u8) -> AppResult<()> {
    if percentage <= 100 {
        Ok(())
    } else {
        Err(AppError::invalid_percentage(format!(
            "{} outside 0-100",
            percentage
        )))
    }
}
