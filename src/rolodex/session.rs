//! # Edit Sessions
//!
//! Creating or editing a record is a two-step protocol: stage changes on a
//! private working copy, then either confirm or cancel.
//!
//! ```text
//!            confirm()
//!   Open ───────────────▶ Confirmed ──▶ Commit handed to the caller
//!     │
//!     │      cancel()
//!     └─────────────────▶ Cancelled ──▶ working copy dropped
//! ```
//!
//! The session never touches the collection. [`EditSession::confirm`] returns a
//! [`Commit`] and the caller decides whether to apply it with
//! [`RecordCollection::commit`]. While a session is open, and after it is
//! cancelled, the collection is exactly as it was before the session began.

use crate::collection::RecordCollection;
use crate::error::{RolodexError, Result};
use crate::model::Record;
use crate::schema::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Confirmed,
    Cancelled,
}

/// Where a confirmed session writes its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTarget {
    Append,
    /// Replace the record at `index`, provided it still has `revision`.
    Replace { index: usize, revision: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub record: Record,
    pub target: CommitTarget,
}

#[derive(Debug)]
pub struct EditSession {
    working: Record,
    target: CommitTarget,
    state: SessionState,
}

impl EditSession {
    pub fn begin_create() -> Self {
        Self {
            working: Record::default(),
            target: CommitTarget::Append,
            state: SessionState::Open,
        }
    }

    pub fn begin_edit(collection: &RecordCollection, index: usize) -> Result<Self> {
        let working = collection.get(index)?.clone();
        let revision = collection.revision(index)?;
        Ok(Self {
            working,
            target: CommitTarget::Replace { index, revision },
            state: SessionState::Open,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn target(&self) -> CommitTarget {
        self.target
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == SessionState::Confirmed
    }

    pub fn working(&self) -> Result<&Record> {
        self.ensure_open()?;
        Ok(&self.working)
    }

    pub fn working_mut(&mut self) -> Result<&mut Record> {
        self.ensure_open()?;
        Ok(&mut self.working)
    }

    /// Coerce `value` into `field` on the working copy.
    ///
    /// A value that does not coerce leaves the working copy as it was.
    pub fn stage_field(&mut self, field: Field, value: &str) -> Result<()> {
        self.ensure_open()?;
        field.spec().apply(&mut self.working, value)
    }

    pub fn confirm(&mut self) -> Result<Commit> {
        self.ensure_open()?;
        self.state = SessionState::Confirmed;
        Ok(Commit {
            record: std::mem::take(&mut self.working),
            target: self.target,
        })
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.state = SessionState::Cancelled;
        self.working = Record::default();
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Confirmed | SessionState::Cancelled => Err(RolodexError::SessionClosed),
        }
    }
}
