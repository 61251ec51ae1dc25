//! Named record persistence
//!
//! A record is a text payload stored under a name. Stores:
//! - `FileRecords`: one file per record, overwritten atomically (tmp → rename)
//! - `MemoryRecords`: in-process map for tests and headless runs
//! - `LocalStorageRecords`: browser LocalStorage (wasm32 only)

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by record stores
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid record name {0:?}")]
    InvalidName(String),
    #[error("LocalStorage is not available")]
    StorageUnavailable,
    #[error("LocalStorage rejected record {0:?}")]
    Storage(String),
}

/// Durable storage for named records
pub trait RecordStore {
    /// Overwrite (or create) a record
    fn write_record(&mut self, name: &str, payload: &str) -> Result<(), PersistenceError>;
    /// Read a record, `None` if it was never written
    fn read_record(&self, name: &str) -> Result<Option<String>, PersistenceError>;
    /// Delete a record; deleting a missing record is not an error
    fn delete_record(&mut self, name: &str) -> Result<(), PersistenceError>;
}

fn check_name(name: &str) -> Result<(), PersistenceError> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.contains("..");
    if bad {
        Err(PersistenceError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Records kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemoryRecords {
    records: HashMap<String, String>,
}

impl MemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecords {
    fn write_record(&mut self, name: &str, payload: &str) -> Result<(), PersistenceError> {
        check_name(name)?;
        self.records.insert(name.to_string(), payload.to_string());
        Ok(())
    }

    fn read_record(&self, name: &str) -> Result<Option<String>, PersistenceError> {
        check_name(name)?;
        Ok(self.records.get(name).cloned())
    }

    fn delete_record(&mut self, name: &str) -> Result<(), PersistenceError> {
        check_name(name)?;
        self.records.remove(name);
        Ok(())
    }
}

/// Records stored as files in one directory
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileRecords {
    dir: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileRecords {
    /// Open (and create if needed) a record directory
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> Result<PathBuf, PersistenceError> {
        check_name(name)?;
        Ok(self.dir.join(name))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RecordStore for FileRecords {
    fn write_record(&mut self, name: &str, payload: &str) -> Result<(), PersistenceError> {
        let path = self.path(name)?;
        let tmp = self.dir.join(format!(".{name}.tmp"));
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &path)?;
        log::debug!("Record saved: {}", path.display());
        Ok(())
    }

    fn read_record(&self, name: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path(name)?;
        match std::fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete_record(&mut self, name: &str) -> Result<(), PersistenceError> {
        let path = self.path(name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Record to delete not found: {}", path.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Records stored in browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageRecords;

#[cfg(target_arch = "wasm32")]
impl LocalStorageRecords {
    /// Key prefix so records don't collide with other apps on the origin
    const KEY_PREFIX: &'static str = "row_breaker_";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistenceError::StorageUnavailable)
    }

    fn key(name: &str) -> Result<String, PersistenceError> {
        check_name(name)?;
        Ok(format!("{}{}", Self::KEY_PREFIX, name))
    }
}

#[cfg(target_arch = "wasm32")]
impl RecordStore for LocalStorageRecords {
    fn write_record(&mut self, name: &str, payload: &str) -> Result<(), PersistenceError> {
        let key = Self::key(name)?;
        Self::storage()?
            .set_item(&key, payload)
            .map_err(|_| PersistenceError::Storage(name.to_string()))
    }

    fn read_record(&self, name: &str) -> Result<Option<String>, PersistenceError> {
        let key = Self::key(name)?;
        Self::storage()?
            .get_item(&key)
            .map_err(|_| PersistenceError::Storage(name.to_string()))
    }

    fn delete_record(&mut self, name: &str) -> Result<(), PersistenceError> {
        let key = Self::key(name)?;
        Self::storage()?
            .remove_item(&key)
            .map_err(|_| PersistenceError::Storage(name.to_string()))
    }
}
