//! Catalog of installable augmentation modules.

use combat_core::AugmentModule;

/// Named augmentation modules available to the game.
///
/// Lookup is by name; definition order is preserved for listing.
#[derive(Clone, Debug, Default)]
pub struct ModuleCatalog {
    modules: Vec<AugmentModule>,
}

impl ModuleCatalog {
    /// Builds the catalog, dropping later modules that reuse a name.
    pub fn new(modules: impl IntoIterator<Item = AugmentModule>) -> Self {
        let mut catalog = Self::default();
        for module in modules {
            if catalog.get(&module.name).is_some() {
                tracing::warn!(module = %module.name, "duplicate module definition ignored");
                continue;
            }
            catalog.modules.push(module);
        }
        catalog
    }

    pub fn get(&self, name: &str) -> Option<&AugmentModule> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Returns an iterator over all modules in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &AugmentModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
