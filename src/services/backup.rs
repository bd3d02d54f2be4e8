//! Backup Service
//!
//! Import/export of the whole page collection as a single pretty-printed
//! JSON document. Export suggests a timestamped filename; import
//! validates the document before any state is touched.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::page::{PageCollection, TOTAL_PAGES};
use crate::utils::error::{AppError, AppResult};

/// Result of an export: the serialized document and a suggested filename
#[derive(Debug, Clone, Serialize)]
pub struct BackupExport {
    /// Pretty-printed JSON document
    pub data: String,
    /// Number of page records in the document
    pub record_count: usize,
    /// Timestamped download filename
    pub suggested_filename: String,
}

/// Serialize a collection snapshot into an export document
pub fn export_backup(collection: &PageCollection, now: DateTime<Utc>) -> AppResult<BackupExport> {
    let data = serde_json::to_string_pretty(collection)?;
    let suggested_filename = format!(
        "quran_memorization_{}.json",
        now.format("%Y-%m-%d_%H-%M-%S")
    );

    tracing::info!(
        "Exported {} page records to {}",
        collection.len(),
        suggested_filename
    );
    Ok(BackupExport {
        data,
        record_count: collection.len(),
        suggested_filename,
    })
}

/// Parse an import document into a page collection.
///
/// Any failure — unparseable JSON, unknown status codes, out-of-range
/// pages or percentages — is reported as `MalformedImport`; callers then
/// apply the result wholesale via `replace_all`, so prior state is never
/// touched on failure.
pub fn parse_backup(data: &str) -> AppResult<PageCollection> {
    let collection: PageCollection =
        serde_json::from_str(data).map_err(|e| AppError::malformed_import(e.to_string()))?;

    for (page, record) in collection.iter() {
        if page < 1 || page > TOTAL_PAGES {
            return Err(AppError::malformed_import(format!(
                "page {} outside 1-{}",
                page, TOTAL_PAGES
            )));
        }
        if record.percentage > 100 {
            return Err(AppError::malformed_import(format!(
                "page {}: percentage {} outside 0-100",
                page, record.percentage
            )));
        }
    }

    Ok(collection)
}
