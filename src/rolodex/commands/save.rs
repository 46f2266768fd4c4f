use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::prefs::PreferenceStore;
use std::path::Path;

pub fn run<P: PreferenceStore>(
    gateway: &mut PersistenceGateway<P>,
    collection: &RecordCollection,
    path: &Path,
) -> Result<CmdResult> {
    gateway.save(path, collection)?;

    let mut result = CmdResult::default().with_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Saved {} contacts to {}",
        collection.len(),
        path.display()
    )));
    Ok(result)
}
