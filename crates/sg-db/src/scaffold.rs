//! Migration file scaffolding and sequence numbering

use crate::client::sql_files_sorted;
use crate::error::{DbError, DbResult};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Down prefixes count backwards from here, so that ascending lexical order
/// of `down/` equals reverse application order of `up/`. Caps the scheme at
/// 999 migrations; prefix 1000+ silently collides.
const INIT_DOWN_COUNT: u32 = 1000;

/// Compute the next `(up_prefix, down_prefix)` pair.
///
/// The head sequence is parsed from the lexically last `up/*.sql` filename
/// (`000` when the directory is empty or missing), so the first migration
/// gets `("001", "999")`.
pub fn next_sequence_pair(root: &Path) -> DbResult<(String, String)> {
    let next = head_sequence(&root.join("up"))? + 1;

    let up_prefix = format!("{next:03}");
    let down_prefix = format!("{:03}", INIT_DOWN_COUNT - next);
    Ok((up_prefix, down_prefix))
}

/// Create a pair of empty migration files for `name`.
///
/// Validates the name before touching the filesystem, creates parent
/// directories as needed, and fails if either target file already exists.
/// Returns the `(up, down)` paths created.
pub fn create_migration(root: &Path, name: &str) -> DbResult<(PathBuf, PathBuf)> {
    validate_name(name)?;
    let (up_prefix, down_prefix) = next_sequence_pair(root)?;

    let up_path = root.join("up").join(format!("{up_prefix}-{name}.sql"));
    let down_path = root.join("down").join(format!("{down_prefix}-{name}.sql"));

    touch_new(&up_path)?;
    touch_new(&down_path)?;

    Ok((up_path, down_path))
}

/// Parse the sequence of the lexically last up-file, or 0 when none exist
fn head_sequence(up_dir: &Path) -> DbResult<u32> {
    let files = match sql_files_sorted(up_dir) {
        Ok(files) => files,
        // A missing up/ directory means no migrations yet
        Err(DbError::FileRead { .. }) => Vec::new(),
        Err(e) => return Err(e),
    };

    let Some(last) = files.last() else {
        return Ok(0);
    };

    let stem = last
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let prefix = stem.split('-').next().unwrap_or_default();

    prefix
        .parse::<u32>()
        .map_err(|_| DbError::MalformedSequence(stem.to_string()))
}

/// Migration names are alphanumeric plus dashes, and not dashes alone
fn validate_name(name: &str) -> DbResult<()> {
    let stripped: String = name.chars().filter(|c| *c != '-').collect();

    if stripped.is_empty() || !stripped.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DbError::InvalidMigrationName(name.to_string()));
    }
    Ok(())
}

/// Create an empty file, failing if it already exists (no silent overwrite)
fn touch_new(path: &Path) -> DbResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DbError::CreateFile {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                DbError::MigrationExists {
                    path: path.display().to_string(),
                }
            } else {
                DbError::CreateFile {
                    path: path.display().to_string(),
                    source: e,
                }
            }
        })?;

    Ok(())
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
