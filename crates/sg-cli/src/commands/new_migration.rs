//! New-migration command implementation

use anyhow::{Context, Result};
use sg_db::create_migration;

use crate::cli::{GlobalArgs, NewMigrationArgs};
use crate::commands::common::load_project;

/// Execute the new-migration command
pub fn execute(args: &NewMigrationArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let root = project.migrations_dir();

    let (up_path, down_path) = create_migration(&root, &args.name)
        .context(format!("Failed to scaffold migration '{}'", args.name))?;

    println!("Migration created:");
    println!("- up:   {}", up_path.display());
    println!("- down: {}", down_path.display());
    Ok(())
}
