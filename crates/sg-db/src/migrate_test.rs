use super::*;
use crate::engine::Engine;
use std::error::Error as _;
use std::path::Path;

fn client() -> DatabaseClient {
    DatabaseClient::new(Engine::connect(":memory:").unwrap())
}

fn write_sql(root: &Path, rel: &str, sql: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, sql).unwrap();
}

#[test]
fn test_up_applies_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(
        dir.path(),
        "up/001-create-tables.sql",
        "CREATE TABLE IF NOT EXISTS skill (id INTEGER PRIMARY KEY, name TEXT UNIQUE);",
    );
    write_sql(
        dir.path(),
        "up/002-seed-skills.sql",
        "INSERT INTO skill (id, name) VALUES (1, 'mapping') ON CONFLICT DO NOTHING;",
    );

    let db = client();
    Migrator::new(&db, dir.path()).up().unwrap();

    let count: i64 = db.query_scalar("SELECT count(*) FROM skill;", &[]).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_guarded_migrations_rerun_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(
        dir.path(),
        "up/001-create-tables.sql",
        "CREATE TABLE IF NOT EXISTS skill (id INTEGER PRIMARY KEY, name TEXT UNIQUE);",
    );
    write_sql(
        dir.path(),
        "up/002-seed-skills.sql",
        "INSERT INTO skill (id, name) VALUES (1, 'mapping') ON CONFLICT DO NOTHING;",
    );

    let db = client();
    let migrator = Migrator::new(&db, dir.path());

    // No ledger exists: a second run blindly re-executes every file and
    // must succeed without duplicating side effects.
    migrator.up().unwrap();
    migrator.up().unwrap();

    let count: i64 = db.query_scalar("SELECT count(*) FROM skill;", &[]).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_broken_file_raises_migration_error() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(dir.path(), "up/001-broken.sql", "CREATE TABLE (oops;");

    let db = client();
    let err = Migrator::new(&db, dir.path()).up().unwrap_err();

    let DbError::Migration { direction, source } = &err else {
        panic!("expected migration error, got: {err:?}");
    };
    assert_eq!(*direction, Direction::Up);
    assert!(matches!(**source, DbError::Execution(_)));
    // The statement error stays reachable through the source chain.
    assert!(err.source().is_some());
}

#[test]
fn test_failure_leaves_earlier_files_committed() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(
        dir.path(),
        "up/001-create.sql",
        "CREATE TABLE volunteer (id INTEGER PRIMARY KEY);",
    );
    write_sql(dir.path(), "up/002-broken.sql", "INSERT INTO nowhere VALUES (1);");

    let db = client();
    Migrator::new(&db, dir.path()).up().unwrap_err();

    // Not transactional across files: 001 stays applied.
    let count: i64 = db
        .query_scalar("SELECT count(*) FROM volunteer;", &[])
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_down_runs_independently_of_up() {
    let dir = tempfile::tempdir().unwrap();
    // No up/ directory at all; pairing is a naming convention, not
    // something the runner checks.
    write_sql(
        dir.path(),
        "down/999-drop-tables.sql",
        "DROP TABLE IF EXISTS volunteer;",
    );

    let db = client();
    Migrator::new(&db, dir.path()).down().unwrap();
}

#[test]
fn test_down_files_run_in_mirrored_order() {
    let dir = tempfile::tempdir().unwrap();
    write_sql(
        dir.path(),
        "down/998-drop-views.sql",
        "DROP VIEW IF EXISTS volunteer_skills;",
    );
    write_sql(
        dir.path(),
        "down/999-drop-tables.sql",
        "DROP TABLE IF EXISTS volunteer_skill;",
    );

    let db = client();
    db.execute_batch(
        "CREATE TABLE volunteer_skill (volunteer_id INTEGER, skill_id INTEGER);
         CREATE VIEW volunteer_skills AS SELECT volunteer_id AS volunteer, skill_id AS skill
         FROM volunteer_skill;",
    )
    .unwrap();

    // 998 (the newest migration's inverse) sorts before 999, so the view
    // drops before the table it reads from; a full pass empties the schema.
    Migrator::new(&db, dir.path()).down().unwrap();

    let views: i64 = db
        .query_scalar(
            "SELECT count(*) FROM sqlite_master WHERE type IN ('table', 'view');",
            &[],
        )
        .unwrap();
    assert_eq!(views, 0);
}

#[test]
fn test_missing_direction_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = client();

    let err = Migrator::new(&db, dir.path()).migrate(Direction::Down).unwrap_err();
    assert!(matches!(
        err,
        DbError::Migration {
            direction: Direction::Down,
            ..
        }
    ));
}
