//! File-backed store: a single JSON object of string values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AvailCalError, AvailCalResult};
use crate::storage::KeyValueStore;

const STORAGE_FILE: &str = "storage.json";

/// Persists entries to `<dir>/storage.json`.
///
/// Entries are cached in memory and the whole file is rewritten on every
/// change. A missing file is an empty store; so is one that is not a JSON object.
/// Entries whose value is not a string are dropped on open.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(dir: &Path) -> AvailCalResult<Self> {
        let path = dir.join(STORAGE_FILE);
        let entries = Self::read_entries(&path)?;

        Ok(FileStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> AvailCalResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)?;
        let raw: BTreeMap<String, Value> = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt storage file");
                return Ok(BTreeMap::new());
            }
        };

        // Drop non-string values one by one, keep everything else.
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                other => {
                    warn!(key = %key, value = %other, "Dropping non-string storage entry");
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    fn flush(&self) -> AvailCalResult<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| AvailCalError::Storage("Storage path has no parent directory".into()))?;
        std::fs::create_dir_all(dir)?;

        let temp = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&self.entries)?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), entries = self.entries.len(), "Flushed storage");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AvailCalResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AvailCalResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> AvailCalResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
