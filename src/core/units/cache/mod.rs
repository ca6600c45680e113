//! Set-Associative Cache Model.
//!
//! The cache is `2^s` sets of `E` lines each. Only tags are tracked; no data
//! is stored. An access is resolved entirely within the set its address maps
//! to:
//!
//! 1. **Hit**: a valid line holds the tag. The line is touched.
//! 2. **Miss (cold)**: no line matches and an invalid line exists. The first
//!    invalid line (lowest index) is filled and touched.
//! 3. **Miss with eviction**: no line matches and the set is full. The policy
//!    picks a victim, whose tag is overwritten and which is then touched.

pub mod policies;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::common::Address;
use crate::config::CacheGeometry;

/// A single cache line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    pub valid: bool,
    pub tag: u64,
    /// Recency stamp, meaningful only relative to other lines of the same set.
    pub recency: u64,
}

/// A fixed-size group of lines sharing one set index.
#[derive(Clone, Debug)]
pub struct CacheSet {
    lines: Box<[CacheLine]>,
}

impl CacheSet {
    /// Creates a set of `ways` invalid lines.
    pub fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways].into_boxed_slice(),
        }
    }

    /// Builds a set from explicit line state.
    pub fn from_lines(lines: Vec<CacheLine>) -> Self {
        Self {
            lines: lines.into_boxed_slice(),
        }
    }

    pub fn lines(&self) -> &[CacheLine] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [CacheLine] {
        &mut self.lines
    }

    /// Returns the way holding `tag`, if any.
    pub fn find(&self, tag: u64) -> Option<usize> {
        self.lines.iter().position(|l| l.valid && l.tag == tag)
    }

    /// Returns the lowest-indexed invalid way, if any.
    pub fn first_invalid(&self) -> Option<usize> {
        self.lines.iter().position(|l| !l.valid)
    }

    pub fn is_full(&self) -> bool {
        self.first_invalid().is_none()
    }

    /// Returns the stamp the next touched line in this set receives:
    /// one more than the largest stamp among valid lines, or 1 for an empty set.
    pub fn next_recency(&self) -> u64 {
        self.lines
            .iter()
            .filter(|l| l.valid)
            .map(|l| l.recency)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn invalidate(&mut self) {
        self.lines.fill(CacheLine::default());
    }
}

/// Result of resolving one access against the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The tag was resident in `way`.
    Hit { way: usize },
    /// The tag was installed into the previously invalid `way`.
    Miss { way: usize },
    /// The tag replaced `evicted_tag` in `way`.
    Eviction { way: usize, evicted_tag: u64 },
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit { .. })
    }

    pub fn is_eviction(&self) -> bool {
        matches!(self, Outcome::Eviction { .. })
    }

    /// Way that holds the accessed tag after resolution.
    pub fn way(&self) -> usize {
        match *self {
            Outcome::Hit { way } | Outcome::Miss { way } | Outcome::Eviction { way, .. } => way,
        }
    }
}

/// Tag-only set-associative cache with LRU replacement.
pub struct CacheSim {
    geometry: CacheGeometry,
    sets: Box<[CacheSet]>,
    policy: LruPolicy,
}

impl CacheSim {
    /// Creates an empty cache for the given geometry.
    pub fn new(geometry: CacheGeometry) -> Self {
        let sets = (0..geometry.num_sets())
            .map(|_| CacheSet::new(geometry.lines_per_set()))
            .collect();
        Self {
            geometry,
            sets,
            policy: LruPolicy::new(),
        }
    }

    pub fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Returns the set at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^s`.
    pub fn set(&self, index: usize) -> &CacheSet {
        &self.sets[index]
    }

    /// Checks whether the block containing `addr` is resident, without
    /// touching recency.
    pub fn contains(&self, addr: u64) -> bool {
        let decoded = Address::new(addr).decode(&self.geometry);
        self.sets[decoded.set].find(decoded.tag).is_some()
    }

    /// Decodes `addr` and resolves the access.
    pub fn access(&mut self, addr: u64) -> Outcome {
        let decoded = Address::new(addr).decode(&self.geometry);
        self.resolve(decoded.set, decoded.tag)
    }

    /// Resolves an access to `tag` in set `set_index`, updating line state.
    ///
    /// `set_index` always comes from [`Address::decode`] with this cache's
    /// geometry, so it is in range.
    pub fn resolve(&mut self, set_index: usize, tag: u64) -> Outcome {
        let set = &mut self.sets[set_index];

        if let Some(way) = set.find(tag) {
            self.policy.touch(set, way);
            return Outcome::Hit { way };
        }

        if let Some(way) = set.first_invalid() {
            self.policy.touch(set, way);
            let line = &mut set.lines_mut()[way];
            line.valid = true;
            line.tag = tag;
            return Outcome::Miss { way };
        }

        let way = self.policy.victim(set);
        let evicted_tag = set.lines()[way].tag;
        self.policy.touch(set, way);
        set.lines_mut()[way].tag = tag;
        Outcome::Eviction { way, evicted_tag }
    }

    /// Invalidates every line.
    pub fn flush(&mut self) {
        for set in self.sets.iter_mut() {
            set.invalidate();
        }
    }
}
