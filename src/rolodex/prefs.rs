//! # Preferences
//!
//! The address book remembers which file was used last. That memory lives
//! behind [`PreferenceStore`], a plain string key/value interface injected into
//! the [`PersistenceGateway`](crate::gateway::PersistenceGateway), so nothing in
//! the core reaches for global state.
//!
//! - [`FilePreferences`]: production store, a JSON object in `prefs.json`
//! - [`InMemoryPreferences`]: for tests and throwaway sessions

use crate::atomic;
use crate::error::{RolodexError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key holding the path of the last opened or saved file.
pub const LAST_PATH_KEY: &str = "filePath";

const PREFS_FILENAME: &str = "prefs.json";

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a key that is not present is not an error.
    fn clear(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPreferences {
    values: BTreeMap<String, String>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Preferences persisted as a JSON object in `<dir>/prefs.json`.
///
/// Values are cached in memory; every `set`/`clear` rewrites the file. The cache
/// only changes once the write succeeded.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
    // Set when the file on disk could not be read and must be replaced.
    stale: bool,
}

impl FilePreferences {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(PREFS_FILENAME);
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| RolodexError::io(&path, e))?;
            serde_json::from_str(&content).map_err(|e| {
                RolodexError::Preferences(format!("{}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            values,
            stale: false,
        })
    }

    /// Like [`open`](Self::open), but an unreadable `prefs.json` gives an empty
    /// store instead of an error. The next `set` or `clear` overwrites the file.
    /// The read error is returned alongside for reporting.
    pub fn open_or_empty<P: AsRef<Path>>(dir: P) -> (Self, Option<RolodexError>) {
        match Self::open(&dir) {
            Ok(prefs) => (prefs, None),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable preferences");
                let prefs = Self {
                    path: dir.as_ref().join(PREFS_FILENAME),
                    values: BTreeMap::new(),
                    stale: true,
                };
                (prefs, Some(e))
            }
        }
    }

    fn write(&mut self, values: BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| RolodexError::io(parent, e))?;
            }
        }
        let content = serde_json::to_string_pretty(&values)
            .map_err(|e| RolodexError::Preferences(e.to_string()))?;
        atomic::write_atomic(&self.path, content.as_bytes())?;
        self.values = values;
        self.stale = false;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.values.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(next)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        if !self.values.contains_key(key) && !self.stale {
            return Ok(());
        }
        let mut next = self.values.clone();
        next.remove(key);
        self.write(next)
    }
}
