//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest time.
//! Each line carries a recency stamp local to its set. Touching a line (hit,
//! fill, or replacement) stamps it with one more than the newest stamp in the
//! set, so the line with the smallest stamp is the least recently used.
//!
//! Stamps are never compared across sets; there is no global clock.

use super::ReplacementPolicy;
use crate::core::units::cache::CacheSet;

/// LRU Policy state.
///
/// Stateless: all recency information lives in the lines themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Stamps `way` as the most recently used line of the set.
    ///
    /// The stamp is computed before the line is marked valid, so a line being
    /// filled does not contribute its stale stamp to the maximum.
    fn touch(&self, set: &mut CacheSet, way: usize) {
        let stamp = set.next_recency();
        set.lines_mut()[way].recency = stamp;
    }

    /// Identifies the victim way to evict.
    ///
    /// Returns the way with the smallest recency stamp. Ties go to the lowest
    /// index: a later line only replaces the candidate when strictly older.
    fn victim(&self, set: &CacheSet) -> usize {
        let mut victim = 0;
        let mut oldest = u64::MAX;
        for (way, line) in set.lines().iter().enumerate() {
            if line.recency < oldest {
                oldest = line.recency;
                victim = way;
            }
        }
        victim
    }
}
