use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::prefs::PreferenceStore;
use std::path::Path;

use super::helpers::indexed_records;

pub fn run<P: PreferenceStore>(
    gateway: &mut PersistenceGateway<P>,
    collection: &mut RecordCollection,
    path: &Path,
) -> Result<CmdResult> {
    let count = gateway.load(path, collection)?;

    let mut result = CmdResult::default()
        .with_listed_records(indexed_records(collection))
        .with_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Loaded {} contacts from {}",
        count,
        path.display()
    )));
    Ok(result)
}
