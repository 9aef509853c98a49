//! Skillgrid CLI - migrations and directory queries for the volunteer-skills store

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{find, migrate, new_migration, stats};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Migrate(args) => migrate::execute(args, &cli.global),
        cli::Commands::NewMigration(args) => new_migration::execute(args, &cli.global),
        cli::Commands::Stats(args) => stats::execute(args, &cli.global),
        cli::Commands::Find(args) => find::execute(args, &cli.global),
    }
}
