use petpark_core::db::migrations::latest_version;
use petpark_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in ["contributor", "pet_park", "amenity", "pet_park_amenity"] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn amenity_catalog_is_seeded() {
    let conn = open_db_in_memory().unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM amenity WHERE amenity IN ('wifi', 'dog friendly');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn foreign_keys_are_enabled() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("petpark.db");

    let first = open_db(&path).unwrap();
    assert_eq!(schema_version(&first), latest_version());
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    let catalog_rows: i64 = second
        .query_row("SELECT COUNT(*) FROM amenity;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(catalog_rows, 12, "catalog seed must not be applied twice");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reopening_at_older_version_runs_only_later_steps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.db");

    let conn = open_db(&path).unwrap();
    conn.execute_batch("DELETE FROM amenity; PRAGMA user_version = 1;")
        .unwrap();
    drop(conn);

    let reopened = open_db(&path).unwrap();
    assert_eq!(schema_version(&reopened), latest_version());
    let catalog_rows: i64 = reopened
        .query_row("SELECT COUNT(*) FROM amenity;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(catalog_rows, 12);
}

#[test]
fn failing_step_reports_its_version_and_keeps_recorded_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.db");

    // Claims step 1 without any of its tables, so seeding the catalog fails.
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 1;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::MigrationFailed { version, name, .. } => {
            assert_eq!(version, 2);
            assert_eq!(name, "amenity_catalog");
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
