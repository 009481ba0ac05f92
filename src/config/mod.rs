//! Invocation configuration and validation
//!
//! This module describes what a run was asked to do and checks the
//! flags against the selected operation.

pub mod schema;
pub mod types;

// Re-export main types
pub use schema::*;
pub use types::*;
