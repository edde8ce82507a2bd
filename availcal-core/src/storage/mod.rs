//! Key-value persistence for widget state.
//!
//! The store and widget only ever talk to [`KeyValueStore`], so they can run
//! against an in-memory map in tests and a file on disk in the CLI.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AvailCalResult;

/// String key-value store with local-storage semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AvailCalResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AvailCalResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> AvailCalResult<()>;
}
