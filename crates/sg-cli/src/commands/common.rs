//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sg_core::Project;
use sg_db::{DatabaseClient, Engine};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load the project named by --project-dir (honoring a --config override)
pub(crate) fn load_project(global: &GlobalArgs) -> Result<Project> {
    let dir = Path::new(&global.project_dir);

    match &global.config {
        Some(config) => Project::load_with_config(dir, Path::new(config)),
        None => Project::load(dir),
    }
    .context("Failed to load project")
}

/// Build a database client from the project config (or the --dsn override)
pub(crate) fn connect(project: &Project, global: &GlobalArgs) -> Result<DatabaseClient> {
    let dsn = global
        .dsn
        .as_ref()
        .unwrap_or(&project.config.database.dsn);

    if global.verbose {
        eprintln!("[verbose] Connecting to database: {dsn}");
    }

    let engine = Engine::connect(dsn).context("Failed to connect to database")?;
    Ok(DatabaseClient::new(engine))
}
