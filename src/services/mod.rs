//! Services
//!
//! Business logic: the progress store, read-side aggregation, backup
//! import/export, and display settings.

pub mod backup;
pub mod progress;
pub mod settings;
pub mod stats;

pub use backup::*;
pub use progress::*;
pub use settings::*;
pub use stats::*;
