//! Augmentation module loader.

use std::path::Path;

use combat_core::AugmentModule;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::modules::ModuleCatalog;

const EMBEDDED: &str = include_str!("../../data/modules.ron");

/// Module list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleFile {
    pub modules: Vec<AugmentModule>,
}

/// Loader for augmentation modules from RON files.
pub struct ModuleLoader;

impl ModuleLoader {
    /// Load modules from a RON file.
    pub fn load(path: &Path) -> LoadResult<ModuleCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load the modules shipped with the crate.
    pub fn embedded() -> LoadResult<ModuleCatalog> {
        Self::parse(EMBEDDED)
    }

    pub fn parse(content: &str) -> LoadResult<ModuleCatalog> {
        let file: ModuleFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse module RON: {}", e))?;
        Ok(ModuleCatalog::new(file.modules))
    }
}
