//! Cache core.
//!
//! Holds the cache state model. Everything that touches files, flags or
//! output lives outside this module.

/// Modelled hardware units.
pub mod units;

pub use units::cache::{CacheLine, CacheSet, CacheSim, Outcome};
