//! Migrate command implementation

use anyhow::Result;
use sg_db::{Direction, Migrator};

use crate::cli::{GlobalArgs, MigrateArgs, MigrateDirection};
use crate::commands::common::{connect, load_project};

/// Execute the migrate command
pub fn execute(args: &MigrateArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let db = connect(&project, global)?;

    let root = project.migrations_dir();
    if global.verbose {
        eprintln!("[verbose] Migration root: {}", root.display());
    }

    let direction = match args.direction {
        MigrateDirection::Up => Direction::Up,
        MigrateDirection::Down => Direction::Down,
    };

    let migrator = Migrator::new(&db, root);
    match direction {
        Direction::Up => migrator.up()?,
        Direction::Down => migrator.down()?,
    }

    println!("Migration {direction} complete.");
    Ok(())
}
