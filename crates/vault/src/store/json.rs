use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::StoreError;
use crate::record::EncodingRecord;
use crate::store::RecordStore;

/// Record log kept as one JSON array in a text file.
///
/// Every append reads the whole file and replaces it with a new one written
/// next to it, so the old log stays intact until the new one is complete.
/// A missing or blank file is an empty log.
#[derive(Debug, Clone)]
pub struct JsonLogStore {
    path: PathBuf,
}

impl JsonLogStore {
    /// Open the log at `path`. The file is created on first append.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        // A corrupt log fails here.
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<EncodingRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, records: &[EncodingRecord]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut tmp, records)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl RecordStore for JsonLogStore {
    fn append(&mut self, record: EncodingRecord) -> Result<(), StoreError> {
        let mut records = self.load()?;
        debug!(id = %record.id, total = records.len() + 1, path = %self.path.display(), "appending record");
        records.push(record);
        self.save(&records)
    }

    fn records(&self) -> Result<Vec<EncodingRecord>, StoreError> {
        self.load()
    }
}
