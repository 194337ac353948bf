//! Content loaders for reading combat data from files.
//!
//! Each loader parses one file format into a combat-core type. Embedded
//! copies of the default data are available without touching the disk.

pub mod attacks;
pub mod config;
pub mod factory;
pub mod modules;

pub use attacks::AttackLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use modules::ModuleLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
