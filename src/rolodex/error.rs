use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    /// `index` is the 0-based position; the message shows it 1-based.
    #[error("No contact #{} (the address book has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value {value:?} for field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Edit session is already closed")]
    SessionClosed,

    #[error("Record at index {index} changed since editing began")]
    EditConflict { index: usize },

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RolodexError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDocument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
