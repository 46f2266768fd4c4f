//! # Persistence Gateway
//!
//! [`PersistenceGateway`] moves a [`RecordCollection`] between memory and disk
//! through the [`codec`](crate::codec), and remembers the last path used in the
//! injected [`PreferenceStore`].
//!
//! Failures never leak into state: a load that cannot read or decode its file
//! leaves both the collection and the remembered path as they were, and a save
//! that cannot write leaves the remembered path alone. Every error names the
//! path involved; turning it into a user-facing notice is the caller's job.

use crate::atomic;
use crate::codec;
use crate::collection::RecordCollection;
use crate::error::{RolodexError, Result};
use crate::prefs::{PreferenceStore, LAST_PATH_KEY};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct PersistenceGateway<P: PreferenceStore> {
    prefs: P,
}

impl<P: PreferenceStore> PersistenceGateway<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    /// Replace `collection` with the contents of `path`. Returns the record count.
    pub fn load(&mut self, path: &Path, collection: &mut RecordCollection) -> Result<usize> {
        let bytes = fs::read(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "could not read address book");
            RolodexError::io(path, e)
        })?;

        let records = codec::decode(&bytes).map_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected address book");
            match e {
                RolodexError::MalformedDocument(msg) => {
                    RolodexError::MalformedDocument(format!("{}: {}", path.display(), msg))
                }
                other => other,
            }
        })?;

        let count = records.len();
        collection.replace_all(records);
        self.remember(path);
        debug!(path = %path.display(), count, "loaded address book");
        Ok(count)
    }

    pub fn save(&mut self, path: &Path, collection: &RecordCollection) -> Result<()> {
        let bytes = codec::encode(collection.snapshot());
        atomic::write_atomic(path, &bytes).map_err(|e| {
            warn!(path = %path.display(), error = %e, "could not write address book");
            e
        })?;
        self.remember(path);
        debug!(path = %path.display(), count = collection.len(), "saved address book");
        Ok(())
    }

    pub fn last_path(&self) -> Option<PathBuf> {
        self.prefs
            .get(LAST_PATH_KEY)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    pub fn forget_last_path(&mut self) -> Result<()> {
        self.prefs.clear(LAST_PATH_KEY)
    }

    /// Load the remembered file, if any. Returns the path that was loaded.
    ///
    /// On failure the remembered path is kept; the caller decides whether to
    /// forget it.
    pub fn restore_last(&mut self, collection: &mut RecordCollection) -> Result<Option<PathBuf>> {
        match self.last_path() {
            Some(path) => {
                self.load(&path, collection)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    // The file operation already succeeded; a preference write failure only
    // costs the "last file" convenience.
    fn remember(&mut self, path: &Path) {
        let value = path.to_string_lossy();
        if let Err(e) = self.prefs.set(LAST_PATH_KEY, &value) {
            warn!(path = %path.display(), error = %e, "could not remember last path");
        }
    }
}
