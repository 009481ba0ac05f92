//! Error types for userstore

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for userstore operations
pub type Result<T> = std::result::Result<T, UserStoreError>;

/// Main error type for userstore
#[derive(Error, Debug)]
pub enum UserStoreError {
    /// A flag required by the selected operation was absent or empty
    #[error("-{0} flag has to be specified")]
    MissingArgument(&'static str),

    /// The `-operation` value is not one of the supported operations
    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    /// The `-item` payload could not be parsed into a user
    #[error("Invalid item: {0}")]
    DecodeItem(#[source] serde_json::Error),

    /// The backing file does not contain a JSON array of users
    #[error("Failed to decode '{}': {source}", path.display())]
    DecodeFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialized
    #[error("Failed to encode users: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backing file could not be read or written
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the result to the output stream failed
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl UserStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        UserStoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from malformed JSON
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            UserStoreError::DecodeItem(_) | UserStoreError::DecodeFile { .. }
        )
    }
}
