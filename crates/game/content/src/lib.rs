//! Data-driven combat content and loaders.
//!
//! This crate houses the static content the combat core runs against and
//! provides loaders for RON/TOML data files:
//! - Attack catalog (data-driven via RON)
//! - Augmentation modules (data-driven via RON)
//! - Combat tuning (data-driven via TOML)
//!
//! Every file ships embedded in the binary; path-based loaders read
//! replacements from a content directory.

pub mod modules;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use modules::ModuleCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{AttackLoader, ConfigLoader, ContentFactory, GameContent, ModuleLoader};
