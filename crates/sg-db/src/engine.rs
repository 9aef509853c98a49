//! Database engine handle

use crate::error::{DbError, DbResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shareable database engine handle.
///
/// Wraps a single connection behind a mutex; clones share the connection.
/// Constructed once from an opaque DSN and passed to whichever component
/// needs it (constructor injection, never a global).
#[derive(Clone, Debug)]
pub struct Engine {
    conn: Arc<Mutex<Connection>>,
    autocommit: bool,
}

impl Engine {
    /// Connect to the database named by `dsn`.
    ///
    /// Statements executed through [`crate::DatabaseClient`] run inside an
    /// explicit transaction.
    pub fn connect(dsn: &str) -> DbResult<Self> {
        Self::open(dsn, false)
    }

    /// Connect in autocommit mode.
    ///
    /// Skips the explicit transaction around each statement, for DDL that
    /// cannot run inside a transaction block on some engines.
    pub fn connect_autocommit(dsn: &str) -> DbResult<Self> {
        Self::open(dsn, true)
    }

    /// Open a connection from a DSN string (handles `:memory:` special case)
    fn open(dsn: &str, autocommit: bool) -> DbResult<Self> {
        let conn = if dsn == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(Path::new(dsn))
        }
        .map_err(|e| DbError::Connection(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            autocommit,
        })
    }

    /// Whether statements run outside an explicit transaction
    pub fn autocommit(&self) -> bool {
        self.autocommit
    }

    /// Acquire the scoped connection; released when the guard drops
    pub fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
