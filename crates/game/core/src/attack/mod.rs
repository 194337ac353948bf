//! Attack lifecycle.
//!
//! - `instantiate`: validates a cast against a caster's resources and builds
//!   a live instance from a catalog entry
//! - `instance`: the live, time-bounded attack and its hit set
//! - `simulate`: per-tick motion and expiry

pub mod error;
mod instance;
mod instantiate;
pub(crate) mod simulate;

pub use error::CastError;
pub use instance::AttackInstance;
pub use instantiate::{CastRequest, Instantiator};
