//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, dispatch to the store,
//! and diagnostic output.

pub mod app;
pub mod logging;

// Re-export main types
pub use app::*;
pub use logging::*;
