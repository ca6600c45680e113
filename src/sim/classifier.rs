//! Operation Classification.
//!
//! Maps one access kind plus the cache's resolution of it to the outcome that
//! is counted and reported. Every access performs exactly one lookup; a
//! modify is credited one extra hit for its store half, which always finds
//! the line the load half just made resident.

use crate::common::AccessKind;
use crate::core::units::cache::{CacheSim, Outcome};
use crate::stats::Totals;

/// Reported outcome of one trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Hit,
    Miss,
    MissEviction,
    /// Modify whose load half hit.
    HitHit,
    /// Modify whose load half filled an invalid line.
    MissHit,
    /// Modify whose load half evicted a line.
    MissEvictionHit,
}

impl Classification {
    /// Combines an access kind with the cache outcome of its single lookup.
    pub fn from_outcome(kind: AccessKind, outcome: Outcome) -> Self {
        match (kind, outcome) {
            (AccessKind::Load | AccessKind::Store, Outcome::Hit { .. }) => Classification::Hit,
            (AccessKind::Load | AccessKind::Store, Outcome::Miss { .. }) => Classification::Miss,
            (AccessKind::Load | AccessKind::Store, Outcome::Eviction { .. }) => {
                Classification::MissEviction
            }
            (AccessKind::Modify, Outcome::Hit { .. }) => Classification::HitHit,
            (AccessKind::Modify, Outcome::Miss { .. }) => Classification::MissHit,
            (AccessKind::Modify, Outcome::Eviction { .. }) => Classification::MissEvictionHit,
        }
    }

    /// Counts this outcome contributes to the run totals.
    pub fn delta(&self) -> Totals {
        match self {
            Classification::Hit => Totals::new(1, 0, 0),
            Classification::Miss => Totals::new(0, 1, 0),
            Classification::MissEviction => Totals::new(0, 1, 1),
            Classification::HitHit => Totals::new(2, 0, 0),
            Classification::MissHit => Totals::new(1, 1, 0),
            Classification::MissEvictionHit => Totals::new(1, 1, 1),
        }
    }

    /// Outcome words as printed in verbose mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Hit => "hit",
            Classification::Miss => "miss",
            Classification::MissEviction => "miss eviction",
            Classification::HitHit => "hit hit",
            Classification::MissHit => "miss hit",
            Classification::MissEvictionHit => "miss eviction hit",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves one access against `cache` and classifies it.
///
/// Exactly one [`CacheSim::resolve`] call is made regardless of `kind`.
pub fn classify(
    cache: &mut CacheSim,
    kind: AccessKind,
    set_index: usize,
    tag: u64,
) -> Classification {
    let outcome = cache.resolve(set_index, tag);
    Classification::from_outcome(kind, outcome)
}
