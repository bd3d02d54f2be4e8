//! Storage Layer
//!
//! Handles all data persistence: the state store capability, the
//! SQLite-backed database, and the in-memory test store.

pub mod database;
pub mod memory;
pub mod store;

pub use database::*;
pub use memory::*;
pub use store::*;
