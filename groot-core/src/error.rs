use std::path::PathBuf;
use thiserror::Error;

use crate::hash::ObjectId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    #[error("Parent {parent} of commit {commit} not found")]
    MissingParent { commit: ObjectId, parent: ObjectId },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("Unsupported repository format version: {0}")]
    UnsupportedFormat(u32),
}

impl Error {
    /// Whether this error means a requested object or commit does not exist,
    /// as opposed to the repository itself being unusable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::ObjectNotFound(_)
                | Error::CommitNotFound(_)
                | Error::MissingParent { .. }
                | Error::InvalidObjectId(_)
        )
    }
}
