//! File-based migration runner

use crate::client::DatabaseClient;
use crate::error::{DbError, DbResult};
use std::fmt;
use std::path::PathBuf;

/// Migration direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Subdirectory name under the migration root
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the migration scripts found under a migration root.
///
/// The root holds `up/` and `down/` subdirectories of `*.sql` files named
/// `<3-digit-sequence>-<name>.sql`; files execute in lexical order. There
/// is no ledger of applied migrations: every file is re-executed on every
/// run, so migration scripts must tolerate re-execution (`IF NOT EXISTS`,
/// `ON CONFLICT DO NOTHING`). A failure on one file leaves earlier files
/// committed and later files unapplied.
pub struct Migrator<'a> {
    client: &'a DatabaseClient,
    root: PathBuf,
}

impl<'a> Migrator<'a> {
    /// Create a runner over the given migration root
    pub fn new(client: &'a DatabaseClient, root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            root: root.into(),
        }
    }

    /// Upgrade database to head migration
    pub fn up(&self) -> DbResult<()> {
        log::info!("Upgrading database to head revision...");
        self.migrate(Direction::Up)
    }

    /// Downgrade database to base migration
    pub fn down(&self) -> DbResult<()> {
        log::info!("Downgrading database to base revision...");
        self.migrate(Direction::Down)
    }

    /// Run all scripts for one direction, wrapping any failure as a
    /// migration error carrying the original cause
    pub fn migrate(&self, direction: Direction) -> DbResult<()> {
        self.client
            .execute_files_in_path(&self.root.join(direction.as_str()))
            .map_err(|e| DbError::Migration {
                direction,
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
