//! sg-db - Database access and migration layer for Skillgrid
//!
//! This crate provides the `Engine` connection handle, the `DatabaseClient`
//! statement executor, the file-based migration runner and scaffolding
//! helper, the bulk-insert parameter encoder, and the volunteer-skills
//! directory client built on top of them.

pub mod client;
pub mod directory;
pub mod engine;
pub mod error;
pub mod migrate;
pub mod params;
pub mod scaffold;

pub use client::DatabaseClient;
pub use directory::SkillsDirectory;
pub use engine::Engine;
pub use error::{DbError, DbResult};
pub use migrate::{Direction, Migrator};
pub use params::encode_insert_params;
pub use scaffold::{create_migration, next_sequence_pair};
