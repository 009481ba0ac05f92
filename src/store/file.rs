//! File-backed user store
//!
//! Every operation is a full cycle: load the whole file, change the list
//! in memory, then replace the whole file.

use crate::error::{Result, UserStoreError};
use crate::store::user::{decode_collection, encode_collection, User, UserCollection};
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Result of adding a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The user was appended and the file rewritten
    Added,
    /// A user with this id is already stored; nothing was written
    AlreadyExists(String),
}

/// Result of removing users by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Number of records dropped
    Removed(usize),
    /// No record had this id; nothing was written
    NotFound(String),
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added => Ok(()),
            AddOutcome::AlreadyExists(id) => write!(f, "Item with id {} already exists", id),
        }
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed(_) => Ok(()),
            RemoveOutcome::NotFound(id) => write!(f, "Item with id {} not found", id),
        }
    }
}

/// Store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store for the given backing file. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserStore { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<UserCollection> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "backing file missing, starting empty");
                return Ok(UserCollection::new());
            }
            Err(e) => return Err(UserStoreError::io(&self.path, e)),
        };

        let users = decode_collection(&data, &self.path)?;
        debug!(path = %self.path.display(), count = users.len(), "loaded users");
        Ok(users)
    }

    /// Replace the backing file with the given collection.
    ///
    /// The new content is written to a temporary file next to the real
    /// target (symlinks resolved) and renamed over it. An existing file
    /// keeps its permissions.
    pub fn save(&self, users: &[User]) -> Result<()> {
        let json = encode_collection(users)?;
        let target = self.resolve_target()?;
        let dir = parent_dir(&target);

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| UserStoreError::io(dir, e))?;
        let permissions = match fs::metadata(&target) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => new_file_permissions(),
            Err(e) => return Err(UserStoreError::io(&target, e)),
        };

        tmp.write_all(json.as_bytes())
            .and_then(|_| match permissions {
                Some(permissions) => tmp.as_file().set_permissions(permissions),
                None => Ok(()),
            })
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| UserStoreError::io(tmp.path(), e))?;
        tmp.persist(&target)
            .map_err(|e| UserStoreError::io(&target, e.error))?;

        debug!(path = %target.display(), count = users.len(), "wrote users");
        Ok(())
    }

    /// The file a save actually replaces: the backing path with any
    /// symlinks followed, or the path itself when nothing exists yet
    fn resolve_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(UserStoreError::io(&self.path, e)),
        }
    }

    /// Append a user unless its id is already taken
    pub fn add(&self, user: User) -> Result<AddOutcome> {
        let mut users = self.load()?;

        if users.iter().any(|u| u.id == user.id) {
            warn!(id = %user.id, "user already exists, not writing");
            return Ok(AddOutcome::AlreadyExists(user.id));
        }

        info!(id = %user.id, "adding user");
        users.push(user);
        self.save(&users)?;
        Ok(AddOutcome::Added)
    }

    /// Parse a JSON user and add it
    pub fn add_json(&self, item: &str) -> Result<AddOutcome> {
        let user = User::from_json(item)?;
        self.add(user)
    }

    /// All users, in insertion order
    pub fn list(&self) -> Result<UserCollection> {
        self.load()
    }

    /// First user with the given id
    pub fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let found = self.load()?.into_iter().find(|u| u.id == id);
        if found.is_none() {
            debug!(id, "no user with this id");
        }
        Ok(found)
    }

    /// Drop every user with the given id
    pub fn remove_by_id(&self, id: &str) -> Result<RemoveOutcome> {
        let users = self.load()?;

        let (removed, kept): (Vec<User>, Vec<User>) =
            users.into_iter().partition(|u| u.id == id);

        if removed.is_empty() {
            return Ok(RemoveOutcome::NotFound(id.to_string()));
        }

        info!(id, removed = removed.len(), remaining = kept.len(), "removing user");
        self.save(&kept)?;
        Ok(RemoveOutcome::Removed(removed.len()))
    }
}

/// Directory a temporary file for `path` is created in
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Mode for a backing file created by the first save: 0644 on Unix
/// rather than the temporary file's 0600
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
