//! Configuration types and parsing for skillgrid.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from skillgrid.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory containing migration scripts, relative to the project root.
    /// Must contain `up/` and `down/` subdirectories of `*.sql` files.
    #[serde(default = "default_migrations_path")]
    pub migrations_path: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Opaque connection string handed to the engine constructor.
    /// `":memory:"` selects an in-memory database.
    #[serde(default = "default_dsn")]
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { dsn: default_dsn() }
    }
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_migrations_path() -> String {
    "migrations".to_string()
}

fn default_dsn() -> String {
    ":memory:".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for skillgrid.yml or skillgrid.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("skillgrid.yml");
        let yaml_path = dir.join("skillgrid.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.migrations_path.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "migrations_path cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Migrations directory resolved against the project root
    pub fn migrations_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.migrations_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
