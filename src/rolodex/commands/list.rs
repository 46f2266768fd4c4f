use crate::collection::RecordCollection;
use crate::commands::{CmdResult, DisplayRecord};
use crate::error::Result;

use super::helpers::{indexed_records, resolve_index};

pub fn run(collection: &RecordCollection) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(indexed_records(collection)))
}

/// List a single record by display index.
pub fn show(collection: &RecordCollection, display_index: usize) -> Result<CmdResult> {
    let position = resolve_index(collection, display_index)?;
    let record = collection.get(position)?.clone();
    Ok(CmdResult::default().with_listed_records(vec![DisplayRecord::at(position, record)]))
}
