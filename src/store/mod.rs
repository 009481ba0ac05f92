//! User record storage
//!
//! This module owns the backing JSON file and the operations that
//! read, mutate and rewrite it.

pub mod file;
pub mod user;

// Re-export main types
pub use file::*;
pub use user::*;
