//! File-backed key/value storage.
//!
//! A small JSON document on disk holding string-keyed values. Values are
//! read once when the store is opened and the whole document is rewritten
//! on every change; fine for the single session record this demo persists.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by [`KvStore`] operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized.
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Internal lock poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A durable string-keyed JSON store backed by a single file.
///
/// Keys map to arbitrary JSON values. The document is loaded eagerly by
/// [`KvStore::open`] and flushed in full by every mutation, so readers never
/// touch the filesystem.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl KvStore {
    /// Open (or create) a store at `path`.
    ///
    /// A missing file yields an empty store. A present but unreadable file is
    /// an error: silently discarding persisted state would make the reload
    /// behavior unpredictable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file or its parent directory
    /// cannot be accessed, or [`StorageError::Encoding`] if the file holds
    /// invalid JSON.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encoding`] if the stored value does not match
    /// the requested type.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        match entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Store `value` under `key` and rewrite the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_value(value)?;
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), encoded);
        Self::flush(&self.path, &entries)
    }

    /// Remove the value stored under `key`, if any, and rewrite the file.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        if entries.remove(key).is_some() {
            Self::flush(&self.path, &entries)?;
        }
        Ok(())
    }

    /// Write the full document to disk.
    fn flush(
        path: &Path,
        entries: &BTreeMap<String, serde_json::Value>,
    ) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)?;
        let mut file = fs::File::create(path)?;
        file.write_all(raw.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}
