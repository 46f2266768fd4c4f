//! # API Facade
//!
//! [`RolodexApi`] is the single entry point a UI talks to. It owns the
//! [`RecordCollection`] and the [`PersistenceGateway`], tracks which file the
//! address book belongs to, and dispatches to `commands/*.rs`.
//!
//! Like the layers below it, the API never prints and never exits. Everything
//! comes back as a [`CmdResult`] or a [`RolodexError`](crate::error::RolodexError),
//! and the UI decides how to present it.
//!
//! ## Generic Over PreferenceStore
//!
//! - Production: `RolodexApi<FilePreferences>`
//! - Testing: `RolodexApi<InMemoryPreferences>`

use crate::collection::RecordCollection;
use crate::commands;
use crate::config::RolodexConfig;
use crate::error::{RolodexError, Result};
use crate::gateway::PersistenceGateway;
use crate::prefs::PreferenceStore;
use std::path::{Path, PathBuf};

pub struct RolodexApi<P: PreferenceStore> {
    collection: RecordCollection,
    gateway: PersistenceGateway<P>,
    current: Option<PathBuf>,
}

impl<P: PreferenceStore> RolodexApi<P> {
    pub fn new(prefs: P) -> Self {
        Self {
            collection: RecordCollection::new(),
            gateway: PersistenceGateway::new(prefs),
            current: None,
        }
    }

    /// Seed and/or restore the address book. See [`commands::startup::run`].
    pub fn start(&mut self, config: &RolodexConfig, file: Option<&Path>) -> Result<CmdResult> {
        let result =
            commands::startup::run(&mut self.gateway, &mut self.collection, config, file)?;
        self.current = result.path.clone();
        Ok(result)
    }

    pub fn collection(&self) -> &RecordCollection {
        &self.collection
    }

    /// Observers and edit sessions work against the collection directly.
    pub fn collection_mut(&mut self) -> &mut RecordCollection {
        &mut self.collection
    }

    /// File the address book was loaded from or last saved to.
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.collection)
    }

    pub fn show(&self, index: usize) -> Result<CmdResult> {
        commands::list::show(&self.collection, index)
    }

    pub fn create(&mut self, values: &[(Field, String)]) -> Result<CmdResult> {
        commands::create::run(&mut self.collection, values)
    }

    pub fn edit(&mut self, index: usize, values: &[(Field, String)]) -> Result<CmdResult> {
        commands::edit::run(&mut self.collection, index, values)
    }

    pub fn delete(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.collection, index)
    }

    pub fn open(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::open::run(&mut self.gateway, &mut self.collection, path)?;
        self.current = Some(path.to_path_buf());
        Ok(result)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::save::run(&mut self.gateway, &self.collection, path)?;
        self.current = Some(path.to_path_buf());
        Ok(result)
    }

    /// Save back to the current file.
    pub fn save(&mut self) -> Result<CmdResult> {
        let path = self.current.clone().ok_or_else(|| {
            RolodexError::Api(
                "No address book file selected (use --file or `save <path>`)".to_string(),
            )
        })?;
        self.save_as(&path)
    }

    pub fn last_path(&mut self, forget: bool) -> Result<CmdResult> {
        commands::paths::run(&mut self.gateway, forget)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DisplayRecord, FieldValues, MessageLevel};
pub use crate::schema::Field;
