//! Database client: statement, file, and directory execution

use crate::engine::Engine;
use crate::error::{DbError, DbResult};
use rusqlite::types::FromSql;
use rusqlite::{Row, ToSql};
use std::path::{Path, PathBuf};

/// Named bind parameters, as rusqlite expects them (keys include the `:`)
pub type NamedParams<'a> = &'a [(&'a str, &'a dyn ToSql)];

/// Basic database client over an injected [`Engine`].
///
/// Every call acquires its own scoped connection and transaction; no
/// transaction spans multiple calls. Failures are never retried, only
/// rolled back and surfaced to the caller.
pub struct DatabaseClient {
    engine: Engine,
}

impl DatabaseClient {
    /// Create a client using an injected engine handle
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// The underlying engine, for use-cases not covered by this client
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Execute a single statement with named bind parameters.
    ///
    /// Runs inside an explicit transaction (unless the engine is in
    /// autocommit mode); on failure the transaction is rolled back before
    /// the error propagates. Returns the number of affected rows.
    pub fn execute(&self, sql: &str, params: NamedParams) -> DbResult<usize> {
        let mut conn = self.engine.lock()?;

        if self.engine.autocommit() {
            return Ok(conn.execute(sql, params)?);
        }

        // Dropping an uncommitted transaction rolls it back, so any `?`
        // below leaves the database untouched.
        let tx = conn.transaction()?;
        let affected = tx.execute(sql, params)?;
        tx.commit()?;
        Ok(affected)
    }

    /// Execute multi-statement SQL text as one batch inside one transaction
    pub fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let mut conn = self.engine.lock()?;

        if self.engine.autocommit() {
            conn.execute_batch(sql)?;
            return Ok(());
        }

        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }

    /// Run a query and map each row through `f`
    pub fn query<T, F>(&self, sql: &str, params: NamedParams, mut f: F) -> DbResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.engine.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| f(row))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Run a query returning a single value (first column of first row)
    pub fn query_scalar<T: FromSql>(&self, sql: &str, params: NamedParams) -> DbResult<T> {
        let conn = self.engine.lock()?;
        Ok(conn.query_row(sql, params, |row| row.get(0))?)
    }

    /// Execute the SQL statements in a given file as one batch
    pub fn execute_file(&self, path: &Path) -> DbResult<()> {
        let sql = std::fs::read_to_string(path).map_err(|e| DbError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        log::info!("Executing SQL from: {}", path.display());
        self.execute_batch(&sql)
    }

    /// Execute all `*.sql` files in a directory, in lexical filename order.
    ///
    /// Stops at the first failure. Each file's transaction is independent:
    /// a failure on file N leaves files 1..N-1 committed.
    pub fn execute_files_in_path(&self, dir: &Path) -> DbResult<()> {
        for path in sql_files_sorted(dir)? {
            self.execute_file(&path)?;
        }
        Ok(())
    }
}

/// List `*.sql` files in a directory, sorted lexically by filename
pub(crate) fn sql_files_sorted(dir: &Path) -> DbResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| DbError::FileRead {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "sql"))
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
