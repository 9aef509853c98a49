use super::*;
use crate::engine::Engine;
use rusqlite::named_params;

fn client() -> DatabaseClient {
    DatabaseClient::new(Engine::connect(":memory:").unwrap())
}

#[test]
fn test_execute_without_params() {
    let db = client();
    db.execute("CREATE TABLE t (id INTEGER);", &[]).unwrap();

    let count: i64 = db.query_scalar("SELECT count(*) FROM t;", &[]).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_execute_with_named_params() {
    let db = client();
    db.execute("CREATE TABLE t (id INTEGER, name TEXT);", &[])
        .unwrap();

    let affected = db
        .execute(
            "INSERT INTO t (id, name) VALUES (:id, :name);",
            named_params! { ":id": 1_i64, ":name": "mapping" },
        )
        .unwrap();
    assert_eq!(affected, 1);

    let name: String = db
        .query_scalar("SELECT name FROM t WHERE id = :id;", named_params! { ":id": 1_i64 })
        .unwrap();
    assert_eq!(name, "mapping");
}

#[test]
fn test_execute_error_is_classified() {
    let db = client();
    let err = db.execute("SELECT * FROM missing;", &[]).unwrap_err();
    assert!(matches!(err, DbError::Execution(_)));
}

#[test]
fn test_failed_batch_rolls_back() {
    let db = client();
    db.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);")
        .unwrap();

    // Second statement is broken; the first must not survive the rollback.
    let err = db
        .execute_batch("INSERT INTO t VALUES (2); INSERT INTO nowhere VALUES (3);")
        .unwrap_err();
    assert!(matches!(err, DbError::Execution(_)));

    let count: i64 = db.query_scalar("SELECT count(*) FROM t;", &[]).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_autocommit_execute() {
    let db = DatabaseClient::new(Engine::connect_autocommit(":memory:").unwrap());
    db.execute("CREATE TABLE t (id INTEGER);", &[]).unwrap();

    let affected = db
        .execute("INSERT INTO t VALUES (:id);", named_params! { ":id": 1_i64 })
        .unwrap();
    assert_eq!(affected, 1);

    let count: i64 = db.query_scalar("SELECT count(*) FROM t;", &[]).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_autocommit_batch_keeps_earlier_statements() {
    let db = DatabaseClient::new(Engine::connect_autocommit(":memory:").unwrap());
    db.execute_batch("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);")
        .unwrap();

    // No wrapping transaction: statements before the broken one stay
    // committed, unlike the transactional default (see
    // test_failed_batch_rolls_back).
    let err = db
        .execute_batch("INSERT INTO t VALUES (2); INSERT INTO nowhere VALUES (3);")
        .unwrap_err();
    assert!(matches!(err, DbError::Execution(_)));

    let count: i64 = db.query_scalar("SELECT count(*) FROM t;", &[]).unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_query_maps_rows() {
    let db = client();
    db.execute_batch(
        "CREATE TABLE t (id INTEGER, name TEXT);
         INSERT INTO t VALUES (1, 'a'), (2, 'b');",
    )
    .unwrap();

    let rows: Vec<(i64, String)> = db
        .query("SELECT id, name FROM t ORDER BY id;", &[], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(rows, vec![(1, "a".to_string()), (2, "b".to_string())]);
}

#[test]
fn test_execute_file_missing() {
    let db = client();
    let err = db
        .execute_file(std::path::Path::new("/nonexistent/001-x.sql"))
        .unwrap_err();
    assert!(matches!(err, DbError::FileRead { .. }));
}

#[test]
fn test_files_run_in_lexical_order() {
    let dir = tempfile::tempdir().unwrap();
    // Written out of order on purpose; 002 depends on 001 having run.
    std::fs::write(
        dir.path().join("002-insert.sql"),
        "INSERT INTO ordered VALUES (2);",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("001-create.sql"),
        "CREATE TABLE ordered (n INTEGER); INSERT INTO ordered VALUES (1);",
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let db = client();
    db.execute_files_in_path(dir.path()).unwrap();

    let rows: Vec<i64> = db
        .query("SELECT n FROM ordered ORDER BY rowid;", &[], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(rows, vec![1, 2]);
}

#[test]
fn test_stops_at_first_failing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("001-create.sql"),
        "CREATE TABLE t (n INTEGER); INSERT INTO t VALUES (1);",
    )
    .unwrap();
    std::fs::write(dir.path().join("002-broken.sql"), "INSERT INTO nowhere VALUES (1);").unwrap();
    std::fs::write(dir.path().join("003-more.sql"), "INSERT INTO t VALUES (3);").unwrap();

    let db = client();
    let err = db.execute_files_in_path(dir.path()).unwrap_err();
    assert!(matches!(err, DbError::Execution(_)));

    // File 001 stays committed, file 003 never ran.
    let count: i64 = db.query_scalar("SELECT count(*) FROM t;", &[]).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_missing_directory_fails() {
    let db = client();
    let err = db
        .execute_files_in_path(std::path::Path::new("/nonexistent/migrations/up"))
        .unwrap_err();
    assert!(matches!(err, DbError::FileRead { .. }));
}
