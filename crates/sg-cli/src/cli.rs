//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Skillgrid - volunteer-skills directory store and migration runner
#[derive(Parser, Debug)]
#[command(name = "sg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override database connection string
    #[arg(short, long, global = true)]
    pub dsn: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the up or down migration scripts
    Migrate(MigrateArgs),

    /// Scaffold a new pair of up/down migration files
    NewMigration(NewMigrationArgs),

    /// Show aggregate volunteer-skill statistics
    Stats(StatsArgs),

    /// Find volunteers holding all given skills
    Find(FindArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Migration direction
    #[arg(value_enum)]
    pub direction: MigrateDirection,
}

/// Migration directions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateDirection {
    /// Upgrade to head revision
    Up,
    /// Downgrade to base revision
    Down,
}

/// Arguments for the new-migration command
#[derive(Args, Debug)]
pub struct NewMigrationArgs {
    /// Migration name (alphanumeric plus dashes)
    pub name: String,
}

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Also print the per-volunteer and per-skill breakdowns
    #[arg(long)]
    pub charts: bool,
}

/// Arguments for the find command
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Skills the volunteer must hold, comma-separated
    #[arg(short, long)]
    pub skills: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
