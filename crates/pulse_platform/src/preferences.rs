//! Persisted key/value preferences
//!
//! The bootstrap layer persists exactly two things: the "has onboarded" flag
//! and the selected theme preset. Stores are last-write-wins with no
//! transactional guarantees.

use crate::error::{PlatformError, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Simple key/value store used for flags and small string settings
pub trait PreferenceStore {
    /// Stored boolean, `false` when the key is absent
    fn get_bool(&self, key: &str) -> bool;
    fn set_bool(&self, key: &str, value: bool);
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: &str);
}

/// On-disk and in-memory representation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct PreferenceTable {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

/// Volatile store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    table: RefCell<PreferenceTable>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, key: &str) -> bool {
        self.table.borrow().flags.get(key).copied().unwrap_or(false)
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.table.borrow_mut().flags.insert(key.to_string(), value);
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.table.borrow().strings.get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) {
        self.table
            .borrow_mut()
            .strings
            .insert(key.to_string(), value.to_string());
    }
}

/// TOML-backed store that writes through on every set
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    table: RefCell<PreferenceTable>,
}

impl FilePreferences {
    /// Open the store at `path`. A missing file is treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|source| PlatformError::PreferenceDecode {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => PreferenceTable::default(),
            Err(source) => return Err(PlatformError::PreferenceIo { path, source }),
        };

        tracing::debug!(path = %path.display(), "preferences: opened");
        Ok(Self {
            path,
            table: RefCell::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current table to disk
    pub fn flush(&self) -> Result<()> {
        let encoded = toml::to_string_pretty(&*self.table.borrow())?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PlatformError::PreferenceIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, encoded).map_err(|source| PlatformError::PreferenceIo {
            path: self.path.clone(),
            source,
        })
    }

    fn write_through(&self) {
        if let Err(err) = self.flush() {
            tracing::warn!(%err, "preferences: write failed; value kept in memory only");
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get_bool(&self, key: &str) -> bool {
        self.table.borrow().flags.get(key).copied().unwrap_or(false)
    }

    fn set_bool(&self, key: &str, value: bool) {
        self.table.borrow_mut().flags.insert(key.to_string(), value);
        self.write_through();
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.table.borrow().strings.get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) {
        self.table
            .borrow_mut()
            .strings
            .insert(key.to_string(), value.to_string());
        self.write_through();
    }
}
