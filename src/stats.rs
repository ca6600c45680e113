//! Simulation statistics collection and reporting.
//!
//! Tracks hit, miss and eviction totals across a run. Totals only ever grow;
//! each replayed record adds a non-negative delta.

use crate::sim::Classification;
use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Running hit/miss/eviction counts.
///
/// Also used as the per-access delta produced by a [`Classification`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl Totals {
    pub const fn new(hits: u64, misses: u64, evictions: u64) -> Self {
        Self {
            hits,
            misses,
            evictions,
        }
    }

    /// Accumulates the delta of one classified access.
    pub fn record(&mut self, classification: Classification) {
        *self += classification.delta();
    }

    /// Number of cache lookups credited, counting both halves of a modify.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of credited lookups that hit, in percent.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// One-line summary: `hits:<h> misses:<m> evictions:<e>`.
    pub fn summary(&self) -> String {
        format!(
            "hits:{} misses:{} evictions:{}",
            self.hits, self.misses, self.evictions
        )
    }

    /// Prints a formatted report of the run.
    pub fn print(&self) {
        let rate = self.hit_rate();
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.accesses());
        println!("hits                     {} ({:.2}%)", self.hits, rate);
        println!(
            "misses                   {} ({:.2}%)",
            self.misses,
            if self.accesses() == 0 { 0.0 } else { 100.0 - rate }
        );
        println!("evictions                {}", self.evictions);
        println!("==========================================================");
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Totals) -> Totals {
        Totals {
            hits: self.hits + rhs.hits,
            misses: self.misses + rhs.misses,
            evictions: self.evictions + rhs.evictions,
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, rhs: Totals) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
