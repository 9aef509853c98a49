//! sg-core - Core library for Skillgrid
//!
//! This crate provides the configuration types and project discovery used
//! across all Skillgrid components.

pub mod config;
pub mod error;
pub mod project;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use project::Project;
