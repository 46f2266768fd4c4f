use crate::atomic;
use crate::error::{RolodexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Startup behaviour, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Start with the sample contacts when no file is remembered
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    /// Load the remembered file on startup
    #[serde(default = "default_true")]
    pub restore_last: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            restore_last: true,
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| RolodexError::io(&config_path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| RolodexError::Api(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| RolodexError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(|e| RolodexError::Api(e.to_string()))?;
        atomic::write_atomic(&config_path, content.as_bytes())
    }

    /// Load config, falling back to defaults when the file cannot be read.
    /// The error is returned so the caller can tell the user.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> (Self, Option<RolodexError>) {
        match Self::load(config_dir) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let flag = parse_flag(value)?;
        match key {
            "seed-samples" => self.seed_samples = flag,
            "restore-last" => self.restore_last = flag,
            other => return Err(RolodexError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("seed-samples", self.seed_samples),
            ("restore-last", self.restore_last),
        ]
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(RolodexError::Api(format!(
            "Expected true or false, got: {}",
            other
        ))),
    }
}
