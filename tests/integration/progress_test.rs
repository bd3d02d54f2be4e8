//! Progress Store Integration Tests
//!
//! Exercises the progress service over the real SQLite database:
//! mutation lifecycle, per-mutation durability across reconstruction,
//! and bulk operations. No mocks; in-memory and tempfile-backed pools.

use hifz_tracker::storage::database::Database;
use hifz_tracker::{AppError, PageStatus, ProgressService};

fn create_test_db() -> Database {
    Database::new_in_memory().expect("Failed to create in-memory test database")
}

#[test]
fn test_lifecycle_over_sqlite() {
    let db = create_test_db();
    let mut service = ProgressService::new(db).unwrap();

    // Cycle a page up to Memorized
    service.advance_status(1, None, None).unwrap();
    service.advance_status(1, None, None).unwrap();
    let record = service.advance_status(1, None, None).unwrap();
    assert_eq!(record.status, PageStatus::Memorized);
    assert_eq!(record.percentage, 100);
    assert_eq!(record.review_count, Some(0));
    assert!(record.next_review.is_some());

    // Confirm two reviews
    service.confirm_review(1).unwrap();
    let record = service.confirm_review(1).unwrap();
    assert_eq!(record.review_count, Some(2));
}

#[test]
fn test_mutations_survive_reconstruction() {
    let db = create_test_db();

    let mut service = ProgressService::new(db.clone()).unwrap();
    service
        .advance_status(9, Some(PageStatus::Memorized), None)
        .unwrap();
    service.confirm_review(9).unwrap();
    service.set_percentage(10, 35).unwrap();
    drop(service);

    let reloaded = ProgressService::new(db).unwrap();
    let record = reloaded.snapshot().effective(9);
    assert_eq!(record.status, PageStatus::Memorized);
    assert_eq!(record.review_count, Some(1));
    assert!(record.next_review.is_some());
    assert_eq!(reloaded.snapshot().effective(10).percentage, 35);
}

#[test]
fn test_durability_across_database_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.db");

    {
        let db = Database::open(&path).unwrap();
        let mut service = ProgressService::new(db).unwrap();
        service.batch_set_status(100, 120, PageStatus::Partial).unwrap();
        service
            .advance_status(100, Some(PageStatus::Memorized), None)
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let reloaded = ProgressService::new(db).unwrap();
    assert_eq!(reloaded.snapshot().len(), 21);
    assert_eq!(
        reloaded.snapshot().status_of(100),
        PageStatus::Memorized
    );
    assert_eq!(reloaded.snapshot().status_of(120), PageStatus::Partial);
}

#[test]
fn test_clear_all_clears_persisted_state() {
    let db = create_test_db();

    let mut service = ProgressService::new(db.clone()).unwrap();
    service.batch_set_status(1, 30, PageStatus::Started).unwrap();
    service.clear_all().unwrap();
    drop(service);

    let reloaded = ProgressService::new(db).unwrap();
    assert!(reloaded.snapshot().is_empty());
}

#[test]
fn test_failed_operations_leave_store_untouched() {
    let db = create_test_db();
    let mut service = ProgressService::new(db.clone()).unwrap();

    assert!(matches!(
        service.advance_status(700, None, None),
        Err(AppError::InvalidPage(_))
    ));
    assert!(matches!(
        service.batch_set_status(50, 20, PageStatus::Memorized),
        Err(AppError::InvalidRange(_))
    ));
    assert!(matches!(
        service.confirm_review(3),
        Err(AppError::InvalidState(_))
    ));
    drop(service);

    let reloaded = ProgressService::new(db).unwrap();
    assert!(reloaded.snapshot().is_empty());
}
