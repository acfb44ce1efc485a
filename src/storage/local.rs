use futures::future::{self, FutureExt, LocalBoxFuture};
use web_sys::Storage;

use super::KeyValueStore;
use crate::error::StorageError;

/// Browser `localStorage`.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> LocalBoxFuture<'_, Result<Option<String>, StorageError>> {
        let result = Self::storage().and_then(|storage| Ok(storage.get_item(key)?));
        future::ready(result).boxed_local()
    }

    fn set(&self, key: &str, value: &str) -> LocalBoxFuture<'_, Result<(), StorageError>> {
        let result = Self::storage().and_then(|storage| Ok(storage.set_item(key, value)?));
        future::ready(result).boxed_local()
    }
}
