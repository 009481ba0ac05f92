//! Integration tests for store operations

mod common;

use common::{create_test_store, create_test_store_with, ALICE, BOB};
use std::fs;
use userstore::cli::perform;
use userstore::config::Invocation;
use userstore::{AddOutcome, RemoveOutcome, User, UserStore, UserStoreError};

#[test]
fn test_add_then_list_contains_record() {
    let (_temp_dir, file_path) = create_test_store();
    let store = UserStore::new(&file_path);

    assert_eq!(store.add_json(ALICE).unwrap(), AddOutcome::Added);

    let users = store.list().unwrap();
    let matching: Vec<&User> = users.iter().filter(|u| u.id == "1").collect();
    assert_eq!(matching, vec![&User::new("1", "a@x.com", 30)]);
}

#[test]
fn test_add_same_id_twice() {
    let (_temp_dir, file_path) = create_test_store();
    let store = UserStore::new(&file_path);

    store.add_json(ALICE).unwrap();
    let second = store
        .add_json(r#"{"id":"1","email":"changed@x.com","age":99}"#)
        .unwrap();

    assert_eq!(second.to_string(), "Item with id 1 already exists");
    let users = store.list().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
}

#[test]
fn test_remove_present_and_absent() {
    let (_temp_dir, file_path) = create_test_store();
    let store = UserStore::new(&file_path);
    store.add_json(ALICE).unwrap();
    store.add_json(BOB).unwrap();

    assert_eq!(store.remove_by_id("1").unwrap(), RemoveOutcome::Removed(1));
    let users = store.list().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users.iter().all(|u| u.id != "1"));

    let outcome = store.remove_by_id("1").unwrap();
    assert_eq!(outcome, RemoveOutcome::NotFound("1".to_string()));
    assert_eq!(outcome.to_string(), "Item with id 1 not found");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_find_by_id_matches_stored_record() {
    let (_temp_dir, file_path) = create_test_store();
    let store = UserStore::new(&file_path);
    store.add_json(BOB).unwrap();

    assert_eq!(
        store.find_by_id("2").unwrap(),
        Some(User::new("2", "b@x.com", 41))
    );
    assert_eq!(store.find_by_id("404").unwrap(), None);
}

#[test]
fn test_list_fresh_store_is_empty() {
    let (_temp_dir, file_path) = create_test_store();
    assert!(UserStore::new(&file_path).list().unwrap().is_empty());
}

#[test]
fn test_list_file_written_as_null() {
    let (_temp_dir, file_path) = create_test_store_with("null");
    let store = UserStore::new(&file_path);
    assert!(store.list().unwrap().is_empty());

    store.add_json(ALICE).unwrap();
    assert_eq!(fs::read_to_string(&file_path).unwrap(), format!("[{}]", ALICE));
}

#[test]
fn test_corrupt_file_is_not_overwritten() {
    let (_temp_dir, file_path) = create_test_store_with("[{\"id\":");
    let store = UserStore::new(&file_path);

    let err = store.add_json(ALICE).unwrap_err();
    assert!(matches!(err, UserStoreError::DecodeFile { .. }));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "[{\"id\":");
}

#[test]
fn test_missing_parent_directory_is_io_error() {
    let (temp_dir, _) = create_test_store();
    let store = UserStore::new(temp_dir.path().join("missing").join("users.json"));

    let err = store.add_json(ALICE).unwrap_err();
    assert!(matches!(err, UserStoreError::Io { .. }));
}

#[test]
fn test_end_to_end_through_perform() {
    let (_temp_dir, file_path) = create_test_store();
    let run = |invocation: Invocation| {
        let mut out = Vec::new();
        perform(&invocation, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    };

    let added = run(Invocation::Add {
        file: file_path.clone(),
        item: ALICE.to_string(),
    });
    assert_eq!(added, "");
    assert_eq!(fs::read_to_string(&file_path).unwrap(), format!("[{}]", ALICE));

    let found = run(Invocation::FindById {
        file: file_path.clone(),
        id: "1".to_string(),
    });
    assert_eq!(found, ALICE);

    let removed = run(Invocation::Remove {
        file: file_path.clone(),
        id: "1".to_string(),
    });
    assert_eq!(removed, "");
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");

    let again = run(Invocation::Remove {
        file: file_path.clone(),
        id: "1".to_string(),
    });
    assert_eq!(again, "Item with id 1 not found");
}
