//! Hifz Tracker - Core Library
//!
//! Backend for a single-user Quran memorization tracker. It includes:
//! - The progress store: per-page status transitions, percentages, and
//!   spaced-repetition review scheduling, durably persisted per mutation
//! - Read-side aggregation: overall and per-Juz' progress, status
//!   counts, review-due buckets, page filtering
//! - Storage layer (SQLite behind an injectable key-value capability)
//! - Backup import/export and display settings

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used items
pub use models::juz::{juz_for_page, JuzInfo, JUZ_TABLE};
pub use models::page::{PageCollection, PageFilter, PageRecord, PageStatus, TOTAL_PAGES};
pub use models::review::{next_review_date, REVIEW_INTERVAL_DAYS};
pub use services::backup::{export_backup, parse_backup, BackupExport};
pub use services::progress::ProgressService;
pub use services::settings::SettingsService;
pub use services::stats::{
    filter_pages, juz_progress, juz_progress_all, overall_progress, review_buckets, status_counts,
    ReviewBuckets, StatusCounts,
};
pub use storage::database::Database;
pub use storage::memory::MemoryStore;
pub use storage::store::StateStore;
pub use utils::error::{AppError, AppResult};
