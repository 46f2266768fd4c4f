use crate::commands::{CmdMessage, CmdResult};
use crate::config::RolodexConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    Set { key: String, value: String },
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let (mut config, problem) = RolodexConfig::load_or_default(config_dir);
    let mut result = CmdResult::default();
    if let Some(e) = problem {
        result.add_message(CmdMessage::warning(format!("{}; using defaults", e)));
    }

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
