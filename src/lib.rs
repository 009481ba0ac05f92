//! Userstore - a small CLI for user records kept in a JSON file
//!
//! Each run loads the whole file, applies one operation (add, list,
//! findById or remove) and, for mutations, writes the whole file back.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use error::{Result, UserStoreError};
pub use store::{AddOutcome, RemoveOutcome, User, UserCollection, UserStore};

/// Current version of userstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
