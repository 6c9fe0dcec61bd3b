//! Durable key-value storage for client-side state.
//!
//! Values are opaque strings (usually JSON), mirroring browser local
//! storage. [`MemoryStore`] is for tests and headless runs; [`FileStore`]
//! keeps every key in one JSON file on disk.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed persistence layer.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
