//! User record type and its JSON encoding

use crate::error::{Result, UserStoreError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single managed record, keyed by `id`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Caller-supplied unique key
    pub id: String,

    /// Email address (not validated)
    pub email: String,

    /// Age (not validated)
    pub age: i64,
}

/// Ordered users as they appear in the backing file
pub type UserCollection = Vec<User>;

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        User {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Parse a user from the JSON text given on the command line
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(UserStoreError::DecodeItem)
    }

    /// Compact JSON form of this user
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(UserStoreError::Encode)
    }
}

/// Decode the contents of a backing file.
///
/// Blank content and a bare `null` both mean "no users".
pub fn decode_collection(data: &[u8], path: &Path) -> Result<UserCollection> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(UserCollection::new());
    }

    let users: Option<UserCollection> =
        serde_json::from_slice(data).map_err(|source| UserStoreError::DecodeFile {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(users.unwrap_or_default())
}

/// Encode users as a compact JSON array
pub fn encode_collection(users: &[User]) -> Result<String> {
    serde_json::to_string(users).map_err(UserStoreError::Encode)
}
