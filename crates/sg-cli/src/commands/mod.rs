//! CLI command implementations

pub(crate) mod common;
pub(crate) mod find;
pub(crate) mod migrate;
pub(crate) mod new_migration;
pub(crate) mod stats;
