//! Simulation harness.
//!
//! Replays access records against a cache in input order, one at a time, and
//! accumulates the totals. Per-access outcomes can be observed through an
//! [`EventSink`].

pub mod classifier;
pub mod loader;
pub mod trace;

pub use classifier::{classify, Classification};

use crate::common::{ConfigError, TraceRecord};
use crate::config::{CacheConfig, CacheGeometry};
use crate::core::units::cache::CacheSim;
use crate::stats::Totals;
use log::{debug, info};
use std::io::{self, Write};

/// Receiver for per-access outcomes, in the order records are processed.
pub trait EventSink {
    fn on_access(&mut self, record: &TraceRecord, classification: Classification)
        -> io::Result<()>;
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_access(&mut self, _: &TraceRecord, _: Classification) -> io::Result<()> {
        Ok(())
    }
}

/// Writes one line per access: `L 10,1 miss eviction`.
pub struct VerboseSink<W: Write> {
    out: W,
}

impl<W: Write> VerboseSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for VerboseSink<W> {
    fn on_access(
        &mut self,
        record: &TraceRecord,
        classification: Classification,
    ) -> io::Result<()> {
        writeln!(self.out, "{} {}", record, classification)
    }
}

/// One simulation run: an exclusively owned cache plus its running totals.
pub struct Simulator {
    cache: CacheSim,
    totals: Totals,
}

impl Simulator {
    /// Creates a run over an empty LRU cache.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            cache: CacheSim::new(geometry),
            totals: Totals::default(),
        }
    }

    /// Decodes, resolves and counts a single record.
    pub fn access(&mut self, record: &TraceRecord) -> Classification {
        let decoded = record.address.decode(self.cache.geometry());
        let classification = classify(&mut self.cache, record.kind, decoded.set, decoded.tag);
        self.totals.record(classification);
        debug!(
            "{} -> set {} tag {:#x}: {}",
            record, decoded.set, decoded.tag, classification
        );
        classification
    }

    /// Replays `records` in order, reporting each outcome to `sink`.
    ///
    /// Returns the totals accumulated by this simulator so far. Fails only if
    /// the sink fails to write.
    pub fn run<'a, I, S>(&mut self, records: I, sink: &mut S) -> io::Result<Totals>
    where
        I: IntoIterator<Item = &'a TraceRecord>,
        S: EventSink + ?Sized,
    {
        info!("simulating {}", self.cache.geometry());
        for record in records {
            let classification = self.access(record);
            sink.on_access(record, classification)?;
        }
        info!("finished: {}", self.totals);
        Ok(self.totals)
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn cache(&self) -> &CacheSim {
        &self.cache
    }
}

/// Validates `config` and replays `records` against a fresh LRU cache.
///
/// Configuration errors are reported before any record is processed.
pub fn simulate(config: &CacheConfig, records: &[TraceRecord]) -> Result<Totals, ConfigError> {
    let geometry = config.validate()?;
    let mut sim = Simulator::new(geometry);
    for record in records {
        sim.access(record);
    }
    Ok(sim.totals())
}
