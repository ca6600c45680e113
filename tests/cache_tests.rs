//! Integration tests for cache system.

use cache_sim::config::{CacheConfig, CacheGeometry};
use cache_sim::core::units::cache::policies::{LruPolicy, ReplacementPolicy};
use cache_sim::core::{CacheLine, CacheSet, CacheSim, Outcome};

/// Creates a validated geometry.
fn geometry(s: i64, e: i64, b: i64) -> CacheGeometry {
    CacheConfig::new(s, e, b).validate().unwrap()
}

fn line(tag: u64, recency: u64) -> CacheLine {
    CacheLine {
        valid: true,
        tag,
        recency,
    }
}

/// Tests cache creation and initialization.
#[test]
fn test_cache_creation() {
    let cache = CacheSim::new(geometry(2, 3, 4));

    assert_eq!(cache.geometry().num_sets(), 4);
    for set in 0..4 {
        assert_eq!(cache.set(set).lines().len(), 3);
        assert!(cache.set(set).lines().iter().all(|l| !l.valid));
    }
}

/// Tests cache line presence checking.
#[test]
fn test_cache_contains() {
    let mut cache = CacheSim::new(geometry(4, 1, 4));

    assert!(!cache.contains(0x1000));
    cache.access(0x1000);
    assert!(cache.contains(0x1000));
    assert!(cache.contains(0x100F));
    assert!(!cache.contains(0x1010));
}

/// Tests that a lookup does not count as a use.
#[test]
fn test_cache_contains_does_not_touch() {
    let mut cache = CacheSim::new(geometry(0, 2, 0));
    cache.access(0x0);
    cache.access(0x1);

    assert!(cache.contains(0x0));
    cache.access(0x2);

    assert!(!cache.contains(0x0), "0x0 was least recently used");
    assert!(cache.contains(0x1));
    assert!(cache.contains(0x2));
}

/// Tests cache hit behavior after initial miss.
#[test]
fn test_cache_access_hit() {
    let mut cache = CacheSim::new(geometry(0, 1, 0));

    assert_eq!(cache.access(0x0), Outcome::Miss { way: 0 });
    assert_eq!(cache.access(0x0), Outcome::Hit { way: 0 });
}

/// Tests that a full set with no matching tag evicts.
#[test]
fn test_cache_access_eviction() {
    let mut cache = CacheSim::new(geometry(0, 1, 0));

    cache.access(0x0);
    let outcome = cache.access(0x10);

    assert_eq!(
        outcome,
        Outcome::Eviction {
            way: 0,
            evicted_tag: 0x0
        }
    );
    assert!(outcome.is_eviction());
    assert!(!cache.contains(0x0));
    assert!(cache.contains(0x10));
}

/// Tests cold misses fill invalid lines from the lowest index up.
#[test]
fn test_cache_fills_lowest_invalid_way() {
    let mut cache = CacheSim::new(geometry(0, 4, 0));

    assert_eq!(cache.access(0xA), Outcome::Miss { way: 0 });
    assert_eq!(cache.access(0xB), Outcome::Miss { way: 1 });
    assert_eq!(cache.access(0xC), Outcome::Miss { way: 2 });

    assert!(!cache.set(0).is_full());
    assert_eq!(cache.access(0xD).way(), 3);
    assert!(cache.set(0).is_full());

    let lines = cache.set(0).lines();
    assert_eq!(lines[0].tag, 0xA);
    assert_eq!(lines[1].tag, 0xB);
    assert_eq!(lines[2].tag, 0xC);
    assert_eq!(lines[3].tag, 0xD);
}

/// Tests recency stamps are local to a set and grow on every touch.
#[test]
fn test_cache_recency_stamps() {
    let mut cache = CacheSim::new(geometry(1, 2, 0));

    cache.access(0b00);
    cache.access(0b10);
    cache.access(0b01);
    cache.access(0b00);

    let set0 = cache.set(0).lines();
    assert_eq!(set0[0].recency, 3);
    assert_eq!(set0[1].recency, 2);

    let set1 = cache.set(1).lines();
    assert_eq!(set1[0].recency, 1, "set 1 has its own counter");
    assert!(!set1[1].valid);
}

/// Tests `next_recency` on empty and populated sets.
#[test]
fn test_cache_set_next_recency() {
    assert_eq!(CacheSet::new(4).next_recency(), 1);

    let set = CacheSet::from_lines(vec![
        line(1, 7),
        CacheLine {
            valid: false,
            tag: 9,
            recency: 100,
        },
        line(2, 3),
    ]);
    assert_eq!(set.next_recency(), 8, "invalid lines are ignored");
}

/// Tests LRU replacement policy.
#[test]
fn test_cache_replacement_lru() {
    let mut cache = CacheSim::new(geometry(0, 2, 0));

    cache.access(0xA);
    cache.access(0xB);
    assert!(cache.access(0xA).is_hit());

    assert_eq!(
        cache.access(0xC),
        Outcome::Eviction {
            way: 1,
            evicted_tag: 0xB
        }
    );
    assert!(cache.contains(0xA));
    assert!(cache.contains(0xC));
}

/// Tests the LRU victim is the first line holding the minimum stamp.
#[test]
fn test_lru_victim_tie_break() {
    let policy = LruPolicy::new();

    let set = CacheSet::from_lines(vec![line(0, 3), line(1, 1), line(2, 1), line(3, 2)]);
    assert_eq!(policy.victim(&set), 1);

    let set = CacheSet::from_lines(vec![line(0, 5), line(1, 5), line(2, 5)]);
    assert_eq!(policy.victim(&set), 0);
}

/// Tests touching a line stamps it above every other line in the set.
#[test]
fn test_lru_touch() {
    let policy = LruPolicy::new();
    let mut set = CacheSet::from_lines(vec![line(0, 4), line(1, 9)]);

    policy.touch(&mut set, 0);

    assert_eq!(set.lines()[0].recency, 10);
    assert_eq!(policy.victim(&set), 1);
}

/// Tests cache flush operation.
#[test]
fn test_cache_flush() {
    let mut cache = CacheSim::new(geometry(4, 2, 4));

    cache.access(0x1000);
    cache.access(0x2000);

    assert!(cache.contains(0x1000));
    assert!(cache.contains(0x2000));

    cache.flush();

    assert!(!cache.contains(0x1000));
    assert!(!cache.contains(0x2000));
    assert_eq!(cache.access(0x1000), Outcome::Miss { way: 0 });
}

/// Tests cache line alignment behavior.
#[test]
fn test_cache_line_alignment() {
    let mut cache = CacheSim::new(geometry(4, 1, 6));

    cache.access(0x1000);

    assert!(cache.access(0x1001).is_hit());
    assert!(cache.access(0x103F).is_hit());
    assert!(!cache.access(0x1040).is_hit());
}

/// Tests multiple cache sets.
#[test]
fn test_cache_multiple_sets() {
    let mut cache = CacheSim::new(geometry(2, 1, 4));

    cache.access(0x00);
    cache.access(0x10);
    cache.access(0x20);
    cache.access(0x30);

    for set in 0..4 {
        assert!(cache.set(set).lines()[0].valid);
        assert_eq!(cache.set(set).lines()[0].tag, 0);
    }

    assert!(cache.access(0x40).is_eviction());
    assert!(cache.contains(0x10));
}

/// Tests a tag is never resident twice in one set.
#[test]
fn test_cache_unique_tags_per_set() {
    let mut cache = CacheSim::new(geometry(1, 4, 2));

    for addr in [0x0, 0x8, 0x0, 0x10, 0x8, 0x0, 0x18, 0x20, 0x0] {
        cache.access(addr);
    }

    for set in 0..2 {
        let mut tags: Vec<u64> = cache
            .set(set)
            .lines()
            .iter()
            .filter(|l| l.valid)
            .map(|l| l.tag)
            .collect();
        let before = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), before);
    }
}
