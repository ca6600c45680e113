//! Cache Replacement Policies.
//!
//! A policy decides two things for a single set: how a touched line is marked
//! as recently used, and which line to give up when the set is full.

use super::CacheSet;

pub use self::lru::LruPolicy;

mod lru;

/// Interface between the cache model and its replacement logic.
pub trait ReplacementPolicy {
    /// Records an access to `way` in `set`.
    fn touch(&self, set: &mut CacheSet, way: usize);

    /// Selects the way to evict from a full set.
    fn victim(&self, set: &CacheSet) -> usize;
}
