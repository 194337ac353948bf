//! Content factory for loading a whole content directory.

use std::path::{Path, PathBuf};

use combat_core::{AttackCatalog, CombatConfig};

use crate::loaders::{AttackLoader, ConfigLoader, LoadResult, ModuleLoader};
use crate::modules::ModuleCatalog;

/// Everything the combat core needs to run.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: CombatConfig,
    pub attacks: AttackCatalog,
    pub modules: ModuleCatalog,
}

impl GameContent {
    /// Content compiled into the crate.
    pub fn embedded() -> LoadResult<Self> {
        Ok(Self {
            config: ConfigLoader::embedded()?,
            attacks: AttackLoader::embedded()?,
            modules: ModuleLoader::embedded()?,
        })
    }
}

/// Content factory that loads combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── attacks.ron
/// └── modules.ron
/// ```
///
/// A missing file falls back to the embedded copy; a present but invalid
/// file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load combat tuning from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        self.load_or_embedded("combat.toml", ConfigLoader::load, ConfigLoader::embedded)
    }

    /// Load the attack catalog from `attacks.ron`.
    pub fn load_attacks(&self) -> LoadResult<AttackCatalog> {
        self.load_or_embedded("attacks.ron", AttackLoader::load, AttackLoader::embedded)
    }

    /// Load augmentation modules from `modules.ron`.
    pub fn load_modules(&self) -> LoadResult<ModuleCatalog> {
        self.load_or_embedded("modules.ron", ModuleLoader::load, ModuleLoader::embedded)
    }

    /// Load every content file.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            config: self.load_config()?,
            attacks: self.load_attacks()?,
            modules: self.load_modules()?,
        })
    }

    fn load_or_embedded<T>(
        &self,
        file: &str,
        load: fn(&Path) -> LoadResult<T>,
        embedded: fn() -> LoadResult<T>,
    ) -> LoadResult<T> {
        let path = self.data_dir.join(file);
        if path.is_file() {
            tracing::info!(path = %path.display(), "loading content file");
            load(&path)
        } else {
            tracing::debug!(path = %path.display(), "content file absent, using embedded copy");
            embedded()
        }
    }
}
