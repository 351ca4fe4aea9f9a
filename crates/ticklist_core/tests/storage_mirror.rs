use rusqlite::Connection;
use ticklist_core::db::migrations::latest_version;
use ticklist_core::db::{open_db, open_db_in_memory};
use ticklist_core::{SqliteTaskStorage, StorageError, Task, TaskStorage, TASKS_KEY};
use uuid::Uuid;

fn task_with_fixed_id(id: &str, text: &str) -> Task {
    Task::with_id(Uuid::parse_str(id).unwrap(), text)
}

#[test]
fn load_returns_empty_list_when_key_is_absent() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::try_new(&conn).unwrap();

    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips_tasks_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::try_new(&conn).unwrap();

    let mut done = task_with_fixed_id("00000000-0000-4000-8000-000000000002", "b");
    done.completed = true;
    let tasks = vec![
        task_with_fixed_id("00000000-0000-4000-8000-000000000001", "a"),
        done,
        task_with_fixed_id("00000000-0000-4000-8000-000000000003", "c"),
    ];

    storage.save(&tasks).unwrap();
    assert_eq!(storage.load().unwrap(), tasks);
}

#[test]
fn save_overwrites_the_mirror_wholesale() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::try_new(&conn).unwrap();

    storage
        .save(&[Task::new("first generation"), Task::new("gone soon")])
        .unwrap();
    let second = vec![Task::new("second generation")];
    storage.save(&second).unwrap();

    assert_eq!(storage.load().unwrap(), second);

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn malformed_mirror_document_degrades_to_empty_list() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv (key, value) VALUES (?1, ?2);",
        [TASKS_KEY, "{not json"],
    )
    .unwrap();

    let storage = SqliteTaskStorage::try_new(&conn).unwrap();
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn mirror_document_uses_camel_case_field_names() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteTaskStorage::try_new(&conn).unwrap();

    storage.save(&[Task::new("wire shape")]).unwrap();

    let document: String = conn
        .query_row("SELECT value FROM kv WHERE key = ?1;", [TASKS_KEY], |row| {
            row.get(0)
        })
        .unwrap();
    assert!(document.contains("\"createdAt\""));
    assert!(document.contains("\"completed\""));
    assert!(!document.contains("created_at"));
}

#[test]
fn tasks_survive_a_reopen_of_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ticklist.db");

    let saved = vec![Task::new("persisted"), Task::new("across restarts")];
    {
        let conn = open_db(&path).unwrap();
        let storage = SqliteTaskStorage::try_new(&conn).unwrap();
        storage.save(&saved).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteTaskStorage::try_new(&conn).unwrap();
    assert_eq!(storage.load().unwrap(), saved);
}

#[test]
fn storage_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteTaskStorage::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn storage_rejects_connection_without_kv_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteTaskStorage::try_new(&conn),
        Err(StorageError::MissingRequiredTable("kv"))
    ));
}
