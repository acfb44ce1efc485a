use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use futures::future::{FutureExt, LocalBoxFuture};

use super::KeyValueStore;
use crate::error::StorageError;

/// Stores every entry in one JSON object on disk.
///
/// The whole file is read on each `get` and rewritten on each `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> LocalBoxFuture<'_, Result<Option<String>, StorageError>> {
        let key = key.to_string();
        async move {
            let mut entries = self.read_entries()?;
            Ok(entries.remove(&key))
        }
        .boxed_local()
    }

    fn set(&self, key: &str, value: &str) -> LocalBoxFuture<'_, Result<(), StorageError>> {
        let key = key.to_string();
        let value = value.to_string();
        async move {
            // A corrupt file is replaced wholesale; I/O failures abort the write.
            let mut entries = match self.read_entries() {
                Ok(entries) => entries,
                Err(e @ StorageError::Serialization(_)) => {
                    log::warn!("Discarding unreadable {}: {}", self.path.display(), e);
                    BTreeMap::new()
                }
                Err(e) => return Err(e),
            };
            entries.insert(key, value);
            self.write_entries(&entries)?;
            log::debug!("Wrote preferences to {}", self.path.display());
            Ok(())
        }
        .boxed_local()
    }
}
