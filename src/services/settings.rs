//! Settings Service
//!
//! Display preferences persisted alongside the page records. The theme
//! flag lives under its own key, outside the page-record state machine.

use crate::storage::store::StateStore;
use crate::utils::error::AppResult;

/// Storage key for the dark-mode flag
const DARK_MODE_KEY: &str = "darkMode";

/// Persisted display preferences
pub struct SettingsService<S: StateStore> {
    store: S,
    dark_mode: bool,
}

impl<S: StateStore> SettingsService<S> {
    /// Create the service, loading the stored preference or defaulting
    /// to light mode
    pub fn new(store: S) -> AppResult<Self> {
        let dark_mode = match store.load(DARK_MODE_KEY)? {
            Some(value) => value == "true",
            None => false,
        };
        Ok(Self { store, dark_mode })
    }

    /// Whether dark mode is enabled
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Set and persist the dark-mode preference
    pub fn set_dark_mode(&mut self, enabled: bool) -> AppResult<()> {
        self.store
            .save(DARK_MODE_KEY, if enabled { "true" } else { "false" })?;
        self.dark_mode = enabled;
        Ok(())
    }

    /// Flip the dark-mode preference, returning the new value
    pub fn toggle_dark_mode(&mut self) -> AppResult<bool> {
        self.set_dark_mode(!self.dark_mode)?;
        Ok(self.dark_mode)
    }
}
