use std::fs;
use std::path::{Path, PathBuf};

use super::record::FileRecord;

/// The Store owns the inventory collection and mirrors it to disk.
///
/// The whole collection lives in memory and is the sole source of truth;
/// after every mutation the full collection is rewritten as one JSON
/// snapshot. There is no incremental persistence.
pub struct Store {
    path: PathBuf,
    records: Vec<FileRecord>,
}

/// Errors from loading or saving the snapshot
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not access inventory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("inventory file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Store {
    /// Open the store at its default location and load the snapshot.
    ///
    /// The snapshot lives in the user's data directory:
    /// - Linux: ~/.local/share/file-cabinet/files.json
    /// - macOS: ~/Library/Application Support/file-cabinet/files.json
    /// - Windows: %APPDATA%\file-cabinet\files.json
    pub fn open() -> Result<Self, StoreError> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let store = Self::open_at(path)?;
        println!("📁 Inventory loaded from: {}", store.path.display());
        Ok(store)
    }

    /// Open the store at an explicit path. An absent file is an empty
    /// collection; unreadable or malformed content is an error.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        let records = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            Vec::new()
        };
        Ok(Store { path, records })
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");
        path.push("file-cabinet");
        path.push("files.json");
        path
    }

    /// Path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full collection, newest first
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by id
    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Add a new record at the front of the collection
    pub fn add(&mut self, record: FileRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);
        self.save()
    }

    /// Replace the record with the same id, field-wise.
    /// Returns false when no record matches.
    pub fn update(&mut self, record: FileRecord) -> Result<bool, StoreError> {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given id.
    /// Returns false when no record matches.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Rewrite the full snapshot
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("records", &self.records.len())
            .finish()
    }
}
