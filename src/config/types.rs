//! Core invocation types
//!
//! This module defines what a single run of the tool was asked to do.

use crate::error::UserStoreError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Flag names as they appear on the command line
pub const OPERATION_FLAG: &str = "operation";
pub const FILE_NAME_FLAG: &str = "fileName";
pub const ITEM_FLAG: &str = "item";
pub const ID_FLAG: &str = "id";

/// All long flags the tool accepts
pub const FLAG_NAMES: &[&str] = &[OPERATION_FLAG, FILE_NAME_FLAG, ITEM_FLAG, ID_FLAG];

/// Supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::List => "list",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }
}

impl FromStr for Operation {
    type Err = UserStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(UserStoreError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flag values as collected from the command line, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    pub operation: Option<String>,
    pub file_name: Option<String>,
    pub item: Option<String>,
    pub id: Option<String>,
}

/// A validated request: one variant per operation, carrying exactly
/// the inputs that operation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Add { file: PathBuf, item: String },
    List { file: PathBuf },
    FindById { file: PathBuf, id: String },
    Remove { file: PathBuf, id: String },
}

impl Invocation {
    pub fn operation(&self) -> Operation {
        match self {
            Invocation::Add { .. } => Operation::Add,
            Invocation::List { .. } => Operation::List,
            Invocation::FindById { .. } => Operation::FindById,
            Invocation::Remove { .. } => Operation::Remove,
        }
    }

    /// Backing file this invocation works on
    pub fn file(&self) -> &Path {
        match self {
            Invocation::Add { file, .. }
            | Invocation::List { file }
            | Invocation::FindById { file, .. }
            | Invocation::Remove { file, .. } => file,
        }
    }
}
