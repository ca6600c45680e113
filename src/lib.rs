//! Set-Associative Cache Simulator Library.
//!
//! This crate replays memory-access traces against a tag-only model of a
//! set-associative cache with LRU replacement and reports how many accesses
//! hit, missed, and caused an eviction. It models no data, no timing and no
//! multi-level hierarchy; the point is to compare cache geometries on the
//! same access pattern.
//!
//! # Architecture
//!
//! * **Decode**: an address is split into tag, set index and block offset.
//! * **Cache**: `2^s` sets of `E` lines, each line tracking a tag and a
//!   per-set recency stamp.
//! * **Classify**: loads and stores make one lookup; a modify makes one
//!   lookup and is credited an extra hit for its store half.
//! * **Stats**: totals accumulate in input order.
//!
//! # Modules
//!
//! * `common`: Address decoding, access records, and error types.
//! * `config`: Configuration loading and validation.
//! * `core`: Cache state model and replacement policy.
//! * `sim`: Trace parsing, loading, and the simulation loop.
//! * `stats`: Totals and reporting.

/// Address decoding, access records, and error types.
pub mod common;

/// Configuration system for cache geometry.
///
/// Loads TOML configuration files, merges command-line overrides, and
/// validates the result before any cache is built.
pub mod config;

/// Cache state model and LRU replacement.
pub mod core;

/// Simulation harness, trace loaders, and per-access event reporting.
pub mod sim;

/// Hit/miss/eviction totals and summary formatting.
pub mod stats;

pub use config::{CacheConfig, CacheGeometry};
pub use sim::{simulate, Classification, Simulator};
pub use stats::Totals;
