// Integration tests for the stored sign-in session

mod common;

use tutortty::error::SessionError;
use tutortty::session::SessionStore;

#[test]
fn test_missing_file_means_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("nested").join("session.json"));
    let profile = common::profile("ada");

    store.save(&profile).unwrap();
    assert!(store.path().exists());
    assert_eq!(store.load().unwrap(), Some(profile));
}

#[test]
fn test_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("session.json"));
    store.save(&common::profile("ada")).unwrap();

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    store.clear().unwrap();
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = SessionStore::new(&path).load().unwrap_err();
    assert!(matches!(err, SessionError::Json { .. }));
}
