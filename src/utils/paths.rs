//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! All persistent state lives under ~/.hifz-tracker/.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::database("Could not determine home directory"))
}

/// Get the tracker directory (~/.hifz-tracker/)
pub fn hifz_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".hifz-tracker"))
}

/// Get the database file path (~/.hifz-tracker/data.db)
pub fn database_path() -> AppResult<PathBuf> {
    Ok(hifz_dir()?.join("data.db"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the tracker directory, creating if it doesn't exist
pub fn ensure_hifz_dir() -> AppResult<PathBuf> {
    let path = hifz_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}
