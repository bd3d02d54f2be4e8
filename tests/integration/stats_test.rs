//! Aggregation Integration Tests
//!
//! Runs the read-side aggregation functions against snapshots produced
//! by a live progress service, as the dashboard collaborators would.

use chrono::Utc;

use hifz_tracker::storage::database::Database;
use hifz_tracker::{
    filter_pages, juz_progress, juz_progress_all, overall_progress, review_buckets, status_counts,
    PageFilter, PageStatus, ProgressService, JUZ_TABLE, TOTAL_PAGES,
};

fn seeded_service() -> ProgressService<Database> {
    let db = Database::new_in_memory().unwrap();
    let mut service = ProgressService::new(db).unwrap();

    // Juz' 1 (pages 1-21) fully memorized, scattered progress after it
    service.batch_set_status(1, 21, PageStatus::Memorized).unwrap();
    service.batch_set_status(22, 25, PageStatus::Partial).unwrap();
    service
        .advance_status(30, Some(PageStatus::Started), Some(20))
        .unwrap();

    service
}

#[test]
fn test_dashboard_aggregates_over_snapshot() {
    let service = seeded_service();
    let snapshot = service.snapshot();

    let progress = overall_progress(snapshot, TOTAL_PAGES);
    assert!((progress - 21.0 / 604.0).abs() < 1e-12);

    let counts = status_counts(snapshot);
    assert_eq!(counts.memorized, 21);
    assert_eq!(counts.partial, 4);
    assert_eq!(counts.started, 1);
}

#[test]
fn test_juz_progress_over_snapshot() {
    let service = seeded_service();
    let snapshot = service.snapshot();

    assert_eq!(juz_progress(snapshot, &JUZ_TABLE[0]), 1.0);
    assert_eq!(juz_progress(snapshot, &JUZ_TABLE[1]), 0.0);

    let all = juz_progress_all(snapshot);
    assert_eq!(all.len(), 30);
    assert_eq!(all[0].1, 1.0);
}

#[test]
fn test_fresh_memorization_schedules_into_tomorrow_bucket() {
    let service = seeded_service();
    let now = Utc::now();

    // schedule(0) = now + 1 day: the next calendar day, not yet due
    let buckets = review_buckets(service.snapshot(), now);
    assert!(buckets.overdue.is_empty());
    assert_eq!(buckets.tomorrow.len(), 21);
}

#[test]
fn test_filters_over_snapshot() {
    let service = seeded_service();
    let snapshot = service.snapshot();
    let now = Utc::now();

    assert_eq!(
        filter_pages(snapshot, PageFilter::All, now).count(),
        TOTAL_PAGES as usize
    );
    assert_eq!(
        filter_pages(snapshot, PageFilter::Status(PageStatus::Memorized), now).count(),
        21
    );
    assert_eq!(
        filter_pages(snapshot, PageFilter::Status(PageStatus::NotStarted), now).count(),
        TOTAL_PAGES as usize - 26
    );
    // Nothing is due immediately after memorizing
    assert_eq!(
        filter_pages(snapshot, PageFilter::DueForReview, now).count(),
        0
    );
}
