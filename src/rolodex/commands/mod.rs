use crate::config::RolodexConfig;
use crate::model::Record;
use crate::schema::Field;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod open;
pub mod paths;
pub mod save;
pub mod startup;

/// A record paired with its 1-based position as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Record,
}

impl DisplayRecord {
    pub fn at(position: usize, record: Record) -> Self {
        Self {
            index: position + 1,
            record,
        }
    }
}

/// Field values to stage, in the order given.
pub type FieldValues = Vec<(Field, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<DisplayRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub path: Option<PathBuf>,
    pub config: Option<RolodexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_config(mut self, config: RolodexConfig) -> Self {
        self.config = Some(config);
        self
    }
}
