//! State Store Capability
//!
//! The persistence seam injected into the services. Implemented by the
//! SQLite-backed database and by an in-memory fake for tests.

use crate::utils::error::AppResult;

/// Durable string key-value storage.
///
/// Every mutation is synchronous and durable before returning. Keys are
/// flat strings; related keys share a prefix so they can be cleared
/// together.
pub trait StateStore {
    /// Load the value stored under a key, if any
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Durably store a value under a key, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under a key; no-op when absent
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Remove every value whose key starts with the given prefix
    fn remove_prefix(&mut self, prefix: &str) -> AppResult<()>;
}
