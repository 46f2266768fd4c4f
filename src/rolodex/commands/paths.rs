use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::prefs::PreferenceStore;

/// Report the remembered file, optionally forgetting it.
pub fn run<P: PreferenceStore>(
    gateway: &mut PersistenceGateway<P>,
    forget: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let last = gateway.last_path();

    if forget {
        gateway.forget_last_path()?;
        let message = match &last {
            Some(path) => format!("Forgot {}", path.display()),
            None => "No file was remembered.".to_string(),
        };
        result.add_message(CmdMessage::success(message));
        return Ok(result);
    }

    match last {
        Some(path) => Ok(result.with_path(path)),
        None => {
            result.add_message(CmdMessage::info("No file remembered yet."));
            Ok(result)
        }
    }
}
