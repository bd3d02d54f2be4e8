//! Integration Tests Module
//!
//! End-to-end tests for the tracker core over real storage backends:
//! progress-store lifecycle and durability, aggregation over
//! service-produced state, and backup import/export.

// Progress store lifecycle and durability tests
mod progress_test;

// Aggregation over live store snapshots
mod stats_test;

// Backup export/import tests
mod backup_test;
