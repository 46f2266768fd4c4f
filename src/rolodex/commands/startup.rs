use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::model::sample_records;
use crate::prefs::PreferenceStore;
use std::path::Path;
use tracing::debug;

/// Bring a fresh collection into its starting state.
///
/// The sample contacts go in first (if configured); then either `explicit` or
/// the remembered file is loaded over them. A remembered file that fails to
/// load is reported as a warning and the samples stay. An explicit file that
/// does not exist yet starts an empty address book at that path.
pub fn run<P: PreferenceStore>(
    gateway: &mut PersistenceGateway<P>,
    collection: &mut RecordCollection,
    config: &RolodexConfig,
    explicit: Option<&Path>,
) -> Result<CmdResult> {
    if config.seed_samples {
        collection.replace_all(sample_records());
    }

    let mut result = CmdResult::default();

    if let Some(path) = explicit {
        if path.exists() {
            gateway.load(path, collection)?;
        } else {
            debug!(path = %path.display(), "starting new address book");
            collection.replace_all(Vec::new());
        }
        return Ok(result.with_path(path.to_path_buf()));
    }

    if !config.restore_last {
        return Ok(result);
    }

    match gateway.restore_last(collection) {
        Ok(Some(path)) => Ok(result.with_path(path)),
        Ok(None) => Ok(result),
        Err(e) => {
            result.add_message(CmdMessage::warning(format!("Could not load data: {}", e)));
            Ok(result)
        }
    }
}
