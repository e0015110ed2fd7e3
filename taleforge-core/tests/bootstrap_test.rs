//! End-to-end bootstrap against a real SQLite file.

use taleforge_core::{Bootstrap, SqliteInitializer, StorageError};

#[test]
fn bootstrap_creates_store_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("data").join("taleforge.db");

    let boot = Bootstrap::new(SqliteInitializer::new(&db));
    boot.start().unwrap().join().unwrap();

    assert!(db.exists());
    let cell = boot.store();
    let store = cell.lock().unwrap();
    assert_eq!(store.schema_version().unwrap(), 1);
    assert!(store.list_library_files().unwrap().is_empty());
}

#[test]
fn unusable_data_dir_leaves_store_absent() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let boot = Bootstrap::new(SqliteInitializer::new(blocker.join("taleforge.db")));
    boot.start().unwrap().join().unwrap();

    assert_eq!(boot.attempts(), 1);
    assert!(matches!(
        boot.store().lock(),
        Err(StorageError::NotInitialized)
    ));
    // A second start does not retry.
    assert!(boot.start().is_none());
    assert_eq!(boot.attempts(), 1);
}
