use crate::types::ItemType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlogoError {
    #[error("unknown item type '{0}': expected activity, model or trigger")]
    UnknownItemType(String),

    #[error("{item_type} '{name}' is already installed")]
    DuplicateName { item_type: ItemType, name: String },

    #[error("unable to find '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("unable to parse '{}', file may be corrupted: {reason}", path.display())]
    CorruptManifest { path: PathBuf, reason: String },

    #[error("'{}' is not a directory; an item locator must name the item's package directory", .0.display())]
    NotAnItemDirectory(PathBuf),

    #[error("cannot copy item to source: invalid item name '{0}' (must start with a letter or digit, contain only letters, digits, '.', '_' or '-', and be at most 128 characters)")]
    InvalidItemName(String),

    #[error("cannot copy item to source: invalid project name '{0}' (must start with a letter or digit, contain only letters, digits, '.', '_' or '-', and be at most 128 characters)")]
    InvalidProjectName(String),

    #[error("cannot copy '{}' into its own subdirectory '{}'", from.display(), to.display())]
    CopyIntoSelf { from: PathBuf, to: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FlogoError {
    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        FlogoError::CorruptManifest {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlogoError>;
