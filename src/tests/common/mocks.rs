use std::cell::{Cell, RefCell};

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// In-memory store that records every call and can be told to fail.
#[derive(Default)]
pub struct MockStore {
    pub value: RefCell<Option<String>>,
    pub fail_get: Cell<bool>,
    pub fail_set: Cell<bool>,
    pub gets: Cell<usize>,
    pub writes: RefCell<Vec<(String, String)>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(value: &str) -> Self {
        let store = Self::new();
        *store.value.borrow_mut() = Some(value.to_string());
        store
    }

    pub fn failing_reads() -> Self {
        let store = Self::new();
        store.fail_get.set(true);
        store
    }

    pub fn failing_writes() -> Self {
        let store = Self::new();
        store.fail_set.set(true);
        store
    }

    pub fn written_values(&self) -> Vec<String> {
        self.writes.borrow().iter().map(|(_, value)| value.clone()).collect()
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, _key: &str) -> LocalBoxFuture<'_, Result<Option<String>, StorageError>> {
        self.gets.set(self.gets.get() + 1);
        let result = if self.fail_get.get() {
            Err(StorageError::Unavailable("mock read failure".to_string()))
        } else {
            Ok(self.value.borrow().clone())
        };
        future::ready(result).boxed_local()
    }

    fn set(&self, key: &str, value: &str) -> LocalBoxFuture<'_, Result<(), StorageError>> {
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        let result = if self.fail_set.get() {
            Err(StorageError::IO("mock write failure".to_string()))
        } else {
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        };
        future::ready(result).boxed_local()
    }
}

/// System appearance source that counts how often it is consulted.
pub struct CountingAppearance {
    pub dark: bool,
    pub reads: Cell<usize>,
}

impl CountingAppearance {
    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            reads: Cell::new(0),
        }
    }
}

impl crate::theme::SystemAppearanceSource for CountingAppearance {
    fn prefers_dark(&self) -> bool {
        self.reads.set(self.reads.get() + 1);
        self.dark
    }
}
