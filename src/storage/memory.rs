use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{self, FutureExt, LocalBoxFuture};

use super::KeyValueStore;
use crate::error::StorageError;

/// Non-durable store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LocalBoxFuture<'_, Result<Option<String>, StorageError>> {
        let value = self.entries.borrow().get(key).cloned();
        future::ready(Ok(value)).boxed_local()
    }

    fn set(&self, key: &str, value: &str) -> LocalBoxFuture<'_, Result<(), StorageError>> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        future::ready(Ok(())).boxed_local()
    }
}
