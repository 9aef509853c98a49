//! Error types for sg-db

use crate::migrate::Direction;
use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Statement execution error (D002).
    /// Raised after the enclosing transaction has been rolled back.
    #[error("[D002] Error executing statement: {0}")]
    Execution(#[from] rusqlite::Error),

    /// SQL file read error (D003)
    #[error("[D003] Failed to read SQL file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Migration pass failure (D004), wrapping the originating error
    #[error("[D004] Error migrating database {direction}: {source}")]
    Migration {
        direction: Direction,
        source: Box<DbError>,
    },

    /// Invalid migration name (D005)
    #[error("[D005] Invalid migration name '{0}': must be alphanumeric plus dashes")]
    InvalidMigrationName(String),

    /// Migration file already exists (D006)
    #[error("[D006] Migration file already exists: {path}")]
    MigrationExists { path: String },

    /// Malformed migration sequence prefix (D007)
    #[error("[D007] Malformed sequence prefix in migration filename '{0}'")]
    MalformedSequence(String),

    /// Migration file creation error (D008)
    #[error("[D008] Failed to create migration file '{path}': {source}")]
    CreateFile {
        path: String,
        source: std::io::Error,
    },

    /// Mutex poisoned (D009)
    #[error("[D009] Database mutex poisoned: {0}")]
    MutexPoisoned(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
