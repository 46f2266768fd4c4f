//! # Record Collection
//!
//! [`RecordCollection`] is the ordered list of records backing the visible
//! address book. Display order is storage order.
//!
//! ## Mutation Rules
//!
//! The list only changes through [`append`](RecordCollection::append),
//! [`remove_at`](RecordCollection::remove_at), [`replace_at`](RecordCollection::replace_at),
//! [`replace_all`](RecordCollection::replace_all) and [`commit`](RecordCollection::commit).
//! Each either applies completely or returns an error with the list untouched.
//! [`snapshot`](RecordCollection::snapshot) hands out a shared slice, so readers
//! can never alias the list mutably.
//!
//! ## Observers
//!
//! A UI subscribes a [`CollectionObserver`] and is told about every structural
//! change after it has been applied. Failed operations are not reported.
//! `replace_all` reports a single [`CollectionChange::Reset`], so no observer
//! ever sees a half-loaded list.
//!
//! ## Revisions
//!
//! Every position carries a revision number, drawn from a counter that only
//! grows. An [`EditSession`](crate::session::EditSession) records the revision
//! of the position it edits; committing checks it again. If another commit
//! replaced the record, or removals shifted a different record into that
//! position, the commit fails with [`RolodexError::EditConflict`].

use crate::error::{RolodexError, Result};
use crate::model::Record;
use crate::session::{Commit, CommitTarget};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionChange {
    Appended { index: usize },
    Removed { index: usize },
    Replaced { index: usize },
    Reset { len: usize },
}

pub trait CollectionObserver {
    fn on_change(&mut self, change: &CollectionChange);
}

#[derive(Default)]
pub struct RecordCollection {
    records: Vec<Record>,
    revisions: Vec<u64>,
    next_revision: u64,
    observers: Vec<Box<dyn CollectionObserver>>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(records);
        collection
    }

    pub fn subscribe(&mut self, observer: Box<dyn CollectionObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(RolodexError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    /// Revision of the record currently at `index`.
    pub fn revision(&self, index: usize) -> Result<u64> {
        self.check_index(index)?;
        Ok(self.revisions[index])
    }

    pub fn append(&mut self, record: Record) -> usize {
        let revision = self.bump();
        self.records.push(record);
        self.revisions.push(revision);
        let index = self.records.len() - 1;
        self.notify(CollectionChange::Appended { index });
        index
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        self.check_index(index)?;
        self.revisions.remove(index);
        let removed = self.records.remove(index);
        self.notify(CollectionChange::Removed { index });
        Ok(removed)
    }

    /// Swap the record at `index`, returning the old one.
    pub fn replace_at(&mut self, index: usize, record: Record) -> Result<Record> {
        self.check_index(index)?;
        let revision = self.bump();
        self.revisions[index] = revision;
        let old = std::mem::replace(&mut self.records[index], record);
        self.notify(CollectionChange::Replaced { index });
        Ok(old)
    }

    pub fn replace_all(&mut self, records: Vec<Record>) {
        let revisions: Vec<u64> = records.iter().map(|_| self.bump()).collect();
        self.records = records;
        self.revisions = revisions;
        self.notify(CollectionChange::Reset {
            len: self.records.len(),
        });
    }

    /// Apply a confirmed edit session. Returns the position written.
    pub fn commit(&mut self, commit: Commit) -> Result<usize> {
        let Commit { record, target } = commit;
        match target {
            CommitTarget::Append => {
                let index = self.append(record);
                debug!(index, "committed new record");
                Ok(index)
            }
            CommitTarget::Replace { index, revision } => {
                self.check_index(index)?;
                if self.revisions[index] != revision {
                    return Err(RolodexError::EditConflict { index });
                }
                self.replace_at(index, record)?;
                debug!(index, "committed edited record");
                Ok(index)
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(RolodexError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }

    fn notify(&mut self, change: CollectionChange) {
        for observer in &mut self.observers {
            observer.on_change(&change);
        }
    }
}

impl std::fmt::Debug for RecordCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCollection")
            .field("records", &self.records)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observer that records every change into a shared log.
    #[derive(Clone, Default)]
    pub struct ChangeLog {
        pub changes: Rc<RefCell<Vec<CollectionChange>>>,
    }

    impl ChangeLog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn taken(&self) -> Vec<CollectionChange> {
            self.changes.borrow_mut().drain(..).collect()
        }
    }

    impl CollectionObserver for ChangeLog {
        fn on_change(&mut self, change: &CollectionChange) {
            self.changes.borrow_mut().push(*change);
        }
    }

    pub fn contacts() -> Vec<Record> {
        vec![
            Record::new("Hans", "Muster")
                .with_street("Bahnhofstrasse 1")
                .with_postal_code(8001)
                .with_city("Zuerich"),
            Record::new("Ruth", "Mueller")
                .with_street("Marktgasse 7")
                .with_postal_code(3011)
                .with_city("Bern"),
            Record::new("Heinz", "Kurz")
                .with_street("Rue du Rhone 12")
                .with_postal_code(1204)
                .with_city("Geneve"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{contacts, ChangeLog};
    use super::*;
    use crate::session::EditSession;

    #[test]
    fn append_adds_at_end() {
        let mut collection = RecordCollection::new();
        assert_eq!(collection.append(Record::new("Hans", "Muster")), 0);
        assert_eq!(collection.append(Record::new("Ruth", "Mueller")), 1);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.snapshot()[1].first_name, "Ruth");
    }

    #[test]
    fn remove_on_empty_collection_fails() {
        let mut collection = RecordCollection::new();
        let err = collection.remove_at(0).unwrap_err();
        assert!(matches!(
            err,
            RolodexError::IndexOutOfRange { index: 0, len: 0 }
        ));
        assert!(collection.is_empty());
    }

    #[test]
    fn remove_out_of_range_leaves_collection_unchanged() {
        let mut collection = RecordCollection::with_records(contacts());
        assert!(collection.remove_at(3).is_err());
        assert!(collection.remove_at(usize::MAX).is_err());
        assert_eq!(collection.snapshot(), contacts().as_slice());
    }

    #[test]
    fn remove_shifts_following_records_left() {
        let mut collection = RecordCollection::with_records(contacts());
        let removed = collection.remove_at(0).unwrap();
        assert_eq!(removed.first_name, "Hans");
        let names: Vec<&str> = collection
            .snapshot()
            .iter()
            .map(|r| r.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ruth", "Heinz"]);
    }

    #[test]
    fn replace_all_then_snapshot_is_identity() {
        let mut collection = RecordCollection::with_records(vec![Record::new("Old", "Entry")]);
        collection.replace_all(contacts());
        assert_eq!(collection.snapshot(), contacts().as_slice());
    }

    #[test]
    fn replace_at_keeps_length_and_neighbours() {
        let mut collection = RecordCollection::with_records(contacts());
        let old = collection
            .replace_at(1, Record::new("Cornelia", "Meier"))
            .unwrap();
        assert_eq!(old.first_name, "Ruth");
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.snapshot()[0], contacts()[0]);
        assert_eq!(collection.snapshot()[2], contacts()[2]);
    }

    #[test]
    fn observers_see_each_structural_change() {
        let log = ChangeLog::new();
        let mut collection = RecordCollection::new();
        collection.subscribe(Box::new(log.clone()));

        collection.replace_all(contacts());
        collection.append(Record::new("Cornelia", "Meier"));
        collection.replace_at(0, Record::default()).unwrap();
        collection.remove_at(2).unwrap();

        assert_eq!(
            log.taken(),
            vec![
                CollectionChange::Reset { len: 3 },
                CollectionChange::Appended { index: 3 },
                CollectionChange::Replaced { index: 0 },
                CollectionChange::Removed { index: 2 },
            ]
        );
    }

    #[test]
    fn failed_operations_are_not_reported() {
        let log = ChangeLog::new();
        let mut collection = RecordCollection::new();
        collection.subscribe(Box::new(log.clone()));

        assert!(collection.remove_at(0).is_err());
        assert!(collection.replace_at(0, Record::default()).is_err());
        assert!(log.taken().is_empty());
    }

    #[test]
    fn revisions_change_on_replace() {
        let mut collection = RecordCollection::with_records(contacts());
        let before = collection.revision(1).unwrap();
        collection.replace_at(1, Record::default()).unwrap();
        assert_ne!(collection.revision(1).unwrap(), before);
        assert!(collection.revision(3).is_err());
    }

    #[test]
    fn second_commit_to_same_index_conflicts() {
        let mut collection = RecordCollection::with_records(contacts());
        let mut first = EditSession::begin_edit(&collection, 0).unwrap();
        let mut second = EditSession::begin_edit(&collection, 0).unwrap();

        first.working_mut().unwrap().city = "Basel".to_string();
        second.working_mut().unwrap().city = "Luzern".to_string();

        collection.commit(first.confirm().unwrap()).unwrap();
        let err = collection.commit(second.confirm().unwrap()).unwrap_err();

        assert!(matches!(err, RolodexError::EditConflict { index: 0 }));
        assert_eq!(collection.snapshot()[0].city, "Basel");
    }

    #[test]
    fn commit_after_shift_conflicts() {
        let mut collection = RecordCollection::with_records(contacts());
        let mut session = EditSession::begin_edit(&collection, 1).unwrap();
        collection.remove_at(0).unwrap();

        let err = collection.commit(session.confirm().unwrap()).unwrap_err();
        assert!(matches!(err, RolodexError::EditConflict { index: 1 }));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn commit_to_removed_tail_is_out_of_range() {
        let mut collection = RecordCollection::with_records(contacts());
        let mut session = EditSession::begin_edit(&collection, 2).unwrap();
        collection.remove_at(2).unwrap();

        let err = collection.commit(session.confirm().unwrap()).unwrap_err();
        assert!(matches!(err, RolodexError::IndexOutOfRange { index: 2, .. }));
    }
}
