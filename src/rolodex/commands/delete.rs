use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;

use super::helpers::resolve_index;

pub fn run(collection: &mut RecordCollection, display_index: usize) -> Result<CmdResult> {
    let position = resolve_index(collection, display_index)?;
    let removed = collection.remove_at(position)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted ({}): {}",
        display_index,
        removed.display_name()
    )));
    Ok(result.with_affected_records(vec![DisplayRecord::at(position, removed)]))
}
