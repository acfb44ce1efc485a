//! Asynchronous string key-value stores scoped to the application.
//!
//! The theme manager only ever talks to [`KeyValueStore`]; which backend sits
//! behind it is decided in [`crate::platform`].

use futures::future::LocalBoxFuture;

use crate::error::StorageError;

#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorageStore;

pub trait KeyValueStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> LocalBoxFuture<'_, Result<Option<String>, StorageError>>;

    fn set(&self, key: &str, value: &str) -> LocalBoxFuture<'_, Result<(), StorageError>>;
}
