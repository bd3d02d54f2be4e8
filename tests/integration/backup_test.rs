//! Backup Integration Tests
//!
//! Export/import flows against live progress services: round-tripping a
//! collection into a second store, and failure handling that leaves
//! prior state untouched.

use chrono::Utc;

use hifz_tracker::storage::database::Database;
use hifz_tracker::{export_backup, parse_backup, AppError, PageStatus, ProgressService};

fn create_service() -> ProgressService<Database> {
    ProgressService::new(Database::new_in_memory().unwrap()).unwrap()
}

#[test]
fn test_export_import_between_stores() {
    let mut source = create_service();
    source.batch_set_status(40, 45, PageStatus::Memorized).unwrap();
    source.confirm_review(42).unwrap();
    source.set_percentage(50, 70).unwrap();

    let export = export_backup(source.snapshot(), Utc::now()).unwrap();
    assert_eq!(export.record_count, 7);
    assert!(export.suggested_filename.starts_with("quran_memorization_"));
    assert!(export.suggested_filename.ends_with(".json"));

    let mut target = create_service();
    let imported = parse_backup(&export.data).unwrap();
    target.replace_all(imported).unwrap();

    assert_eq!(target.snapshot(), source.snapshot());
    assert_eq!(target.snapshot().effective(42).review_count, Some(1));
}

#[test]
fn test_import_replaces_wholesale() {
    let mut service = create_service();
    service.batch_set_status(1, 5, PageStatus::Started).unwrap();

    // Import a document that only knows about page 9
    let imported = parse_backup("{\"9\":{\"status\":3,\"percentage\":100}}").unwrap();
    service.replace_all(imported).unwrap();

    assert_eq!(service.snapshot().len(), 1);
    assert_eq!(service.snapshot().status_of(9), PageStatus::Memorized);
    assert!(service.snapshot().get(1).is_none());
}

#[test]
fn test_failed_import_leaves_state_untouched() {
    let mut service = create_service();
    service.batch_set_status(1, 5, PageStatus::Partial).unwrap();
    let before = service.snapshot().clone();

    // The parse fails before replace_all is ever reached
    let result = parse_backup("{\"1\":{\"status\":9,\"percentage\":0}}");
    assert!(matches!(result, Err(AppError::MalformedImport(_))));

    assert_eq!(*service.snapshot(), before);
}

#[test]
fn test_replace_all_round_trip_is_noop() {
    let mut service = create_service();
    service.batch_set_status(10, 12, PageStatus::Memorized).unwrap();
    service.confirm_review(11).unwrap();

    let snapshot = service.snapshot().clone();
    service.replace_all(snapshot.clone()).unwrap();
    assert_eq!(*service.snapshot(), snapshot);
}
