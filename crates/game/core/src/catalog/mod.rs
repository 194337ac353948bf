//! Attack catalog: the read-only table of attack definitions.
//!
//! The catalog is populated once (usually from content files) and never
//! mutated afterwards. Consumers receive it by reference through the
//! [`AttackOracle`] trait instead of reaching for a global table.

mod definition;
mod effect;
mod element;

use std::collections::HashMap;

pub use definition::AttackDefinition;
pub use effect::{EffectSpec, EffectTag};
pub use element::ElementKind;

/// Read-only lookup of attack definitions by name.
pub trait AttackOracle {
    /// Returns the definition registered under `name`, if any.
    fn attack(&self, name: &str) -> Option<&AttackDefinition>;
}

/// In-memory attack table keyed by definition name.
#[derive(Clone, Debug, Default)]
pub struct AttackCatalog {
    attacks: HashMap<String, AttackDefinition>,
}

impl AttackCatalog {
    /// Builds the catalog. A later definition with an already-registered name
    /// is dropped with a warning.
    pub fn from_definitions(definitions: impl IntoIterator<Item = AttackDefinition>) -> Self {
        let mut attacks = HashMap::new();
        for definition in definitions {
            if attacks.contains_key(&definition.name) {
                tracing::warn!(attack = %definition.name, "duplicate attack definition ignored");
                continue;
            }
            attacks.insert(definition.name.clone(), definition);
        }
        Self { attacks }
    }

    pub fn get(&self, name: &str) -> Option<&AttackDefinition> {
        self.attacks.get(name)
    }

    /// Returns an iterator over all registered attack names.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.attacks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

impl AttackOracle for AttackCatalog {
    fn attack(&self, name: &str) -> Option<&AttackDefinition> {
        self.get(name)
    }
}

impl FromIterator<AttackDefinition> for AttackCatalog {
    fn from_iter<I: IntoIterator<Item = AttackDefinition>>(iter: I) -> Self {
        Self::from_definitions(iter)
    }
}
