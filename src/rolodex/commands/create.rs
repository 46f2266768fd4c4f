use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::schema::Field;
use crate::session::EditSession;

use super::helpers::stage_all;

pub fn run(collection: &mut RecordCollection, values: &[(Field, String)]) -> Result<CmdResult> {
    let mut session = EditSession::begin_create();
    stage_all(&mut session, values)?;

    let commit = session.confirm()?;
    let record = commit.record.clone();
    let position = collection.commit(commit)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added ({}): {}",
        position + 1,
        record.display_name()
    )));
    Ok(result.with_affected_records(vec![DisplayRecord::at(position, record)]))
}
