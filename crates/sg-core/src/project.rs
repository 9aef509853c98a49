//! Project discovery and loading

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Represents a Skillgrid project
#[derive(Debug)]
pub struct Project {
    /// Project root directory
    pub root: PathBuf,

    /// Project configuration
    pub config: Config,
}

impl Project {
    /// Load a project from a directory
    pub fn load(path: &Path) -> CoreResult<Self> {
        let root = Self::resolve_root(path)?;
        let config = Config::load_from_dir(&root)?;

        Ok(Self { root, config })
    }

    /// Load a project, reading configuration from an explicit file
    /// instead of looking for skillgrid.yml in the project root
    pub fn load_with_config(path: &Path, config_path: &Path) -> CoreResult<Self> {
        let root = Self::resolve_root(path)?;
        let config = Config::load(config_path)?;

        Ok(Self { root, config })
    }

    fn resolve_root(path: &Path) -> CoreResult<PathBuf> {
        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        if !root.exists() {
            return Err(CoreError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }

        Ok(root)
    }

    /// Migrations root directory (contains `up/` and `down/`)
    pub fn migrations_dir(&self) -> PathBuf {
        self.config.migrations_path_absolute(&self.root)
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
