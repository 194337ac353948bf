//! Attack catalog loader.

use std::path::Path;

use combat_core::{AttackCatalog, AttackDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/attacks.ron");

/// Attack catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackFile {
    pub attacks: Vec<AttackDefinition>,
}

/// Loader for the attack catalog from RON files.
pub struct AttackLoader;

impl AttackLoader {
    /// Load the attack catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<AttackCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load the attack catalog shipped with the crate.
    pub fn embedded() -> LoadResult<AttackCatalog> {
        Self::parse(EMBEDDED)
    }

    /// Parse and validate catalog RON.
    ///
    /// Definitions with negative or non-finite numbers are rejected.
    pub fn parse(content: &str) -> LoadResult<AttackCatalog> {
        let file: AttackFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attack catalog RON: {}", e))?;

        if let Some(bad) = file.attacks.iter().find(|a| !a.is_well_formed()) {
            anyhow::bail!("Attack '{}' has negative or non-finite values", bad.name);
        }

        let count = file.attacks.len();
        let catalog = AttackCatalog::from_definitions(file.attacks);
        tracing::debug!(attacks = catalog.len(), parsed = count, "attack catalog loaded");
        Ok(catalog)
    }
}
