//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Sample record used across tests
pub const ALICE: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;
pub const BOB: &str = r#"{"id":"2","email":"b@x.com","age":41}"#;

/// Create a temporary directory and the path of a (not yet created) users file in it
pub fn create_test_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("users.json");
    (temp_dir, file_path)
}

/// Create a temporary directory with a users file holding `content`
pub fn create_test_store_with(content: &str) -> (TempDir, PathBuf) {
    let (temp_dir, file_path) = create_test_store();
    fs::write(&file_path, content).unwrap();
    (temp_dir, file_path)
}

/// The userstore binary, isolated from the caller's environment and run
/// inside `dir`
pub fn userstore(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("userstore").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}
