use super::DisplayRecord;
use crate::collection::RecordCollection;
use crate::error::{RolodexError, Result};
use crate::schema::Field;
use crate::session::EditSession;

pub fn indexed_records(collection: &RecordCollection) -> Vec<DisplayRecord> {
    collection
        .snapshot()
        .iter()
        .enumerate()
        .map(|(position, record)| DisplayRecord::at(position, record.clone()))
        .collect()
}

/// Stage every value, cancelling the session on the first one that fails.
pub fn stage_all(session: &mut EditSession, values: &[(Field, String)]) -> Result<()> {
    for (field, value) in values {
        if let Err(e) = session.stage_field(*field, value) {
            session.cancel()?;
            return Err(e);
        }
    }
    Ok(())
}

/// Convert a 1-based display index into a collection position.
pub fn position_of(display_index: usize) -> Result<usize> {
    display_index
        .checked_sub(1)
        .ok_or_else(|| RolodexError::Api("Indexes start at 1".to_string()))
}

/// Like [`position_of`], but also checks the index against `collection`.
pub fn resolve_index(collection: &RecordCollection, display_index: usize) -> Result<usize> {
    let position = position_of(display_index)?;
    if position >= collection.len() {
        return Err(RolodexError::IndexOutOfRange {
            index: position,
            len: collection.len(),
        });
    }
    Ok(position)
}
