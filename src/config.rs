//! Simulator configuration.
//!
//! A cache is described by three parameters: set index bits `s`, lines per set
//! `E`, and block offset bits `b`. They can be supplied on the command line or
//! in a TOML file:
//!
//! ```toml
//! [general]
//! verbose = false
//! trace = "traces/yi.trace"
//!
//! [cache]
//! set_bits = 4
//! lines_per_set = 1
//! block_bits = 4
//! ```
//!
//! Raw values are kept signed so that nonsensical input (a negative bit count,
//! zero lines) reaches [`CacheConfig::validate`] and is rejected there, before
//! any cache state exists.

use crate::common::ConfigError;
use crate::core::units::cache::{CacheLine, CacheSet};
use serde::Deserialize;
use std::fs;
use std::mem;
use std::path::Path;

/// Width of a trace address in bits.
pub const ADDRESS_BITS: i64 = 64;

/// Top-level configuration file contents.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GeneralConfig {
    #[serde(default)]
    pub verbose: bool,
    pub trace: Option<String>,
}

/// Unvalidated cache parameters.
///
/// Every field is optional so a file and command-line flags can each supply
/// part of the geometry; see [`CacheConfig::merge`].
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    pub set_bits: Option<i64>,
    pub lines_per_set: Option<i64>,
    pub block_bits: Option<i64>,
}

impl CacheConfig {
    /// Creates a fully specified configuration.
    pub fn new(set_bits: i64, lines_per_set: i64, block_bits: i64) -> Self {
        Self {
            set_bits: Some(set_bits),
            lines_per_set: Some(lines_per_set),
            block_bits: Some(block_bits),
        }
    }

    /// Overlays `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: CacheConfig) -> Self {
        Self {
            set_bits: other.set_bits.or(self.set_bits),
            lines_per_set: other.lines_per_set.or(self.lines_per_set),
            block_bits: other.block_bits.or(self.block_bits),
        }
    }

    /// Checks the parameters and produces an immutable geometry.
    ///
    /// # Errors
    ///
    /// * a parameter is missing or negative
    /// * `lines_per_set <= 0`
    /// * `set_bits + block_bits > 64`
    /// * the sets and lines of `2^set_bits * lines_per_set` need more than
    ///   `isize::MAX` bytes
    pub fn validate(&self) -> Result<CacheGeometry, ConfigError> {
        let s = self.set_bits.ok_or(ConfigError::Missing("set_bits"))?;
        let e = self
            .lines_per_set
            .ok_or(ConfigError::Missing("lines_per_set"))?;
        let b = self.block_bits.ok_or(ConfigError::Missing("block_bits"))?;

        if s < 0 {
            return Err(ConfigError::NegativeSetBits(s));
        }
        if b < 0 {
            return Err(ConfigError::NegativeBlockBits(b));
        }
        if e <= 0 {
            return Err(ConfigError::NonPositiveLines(e));
        }
        if s.checked_add(b).map_or(true, |sum| sum > ADDRESS_BITS) {
            return Err(ConfigError::AddressWidth { s, b });
        }

        let set_bits = s as u32;
        let block_bits = b as u32;
        let too_large = |lines| ConfigError::TooLarge { s: set_bits, lines };

        let lines_per_set = usize::try_from(e).map_err(|_| too_large(usize::MAX))?;
        let num_sets = 1usize
            .checked_shl(set_bits)
            .ok_or(too_large(lines_per_set))?;

        // Set headers plus every set's line array, in bytes.
        let set_bytes = lines_per_set
            .checked_mul(mem::size_of::<CacheLine>())
            .and_then(|lines| lines.checked_add(mem::size_of::<CacheSet>()));
        set_bytes
            .and_then(|per_set| per_set.checked_mul(num_sets))
            .filter(|&total| total <= isize::MAX as usize)
            .ok_or(too_large(lines_per_set))?;

        Ok(CacheGeometry {
            set_bits,
            lines_per_set,
            block_bits,
        })
    }
}

/// Validated cache geometry.
///
/// Only obtainable through [`CacheConfig::validate`], so holders can rely on
/// `s + b <= 64`, `E >= 1`, and `2^s * E` being addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheGeometry {
    set_bits: u32,
    lines_per_set: usize,
    block_bits: u32,
}

impl CacheGeometry {
    pub fn set_bits(&self) -> u32 {
        self.set_bits
    }

    pub fn lines_per_set(&self) -> usize {
        self.lines_per_set
    }

    pub fn block_bits(&self) -> u32 {
        self.block_bits
    }

    /// Number of sets, `S = 2^s`.
    pub fn num_sets(&self) -> usize {
        1usize << self.set_bits
    }

    /// Block size in bytes, `B = 2^b`. Saturates at `u64::MAX` when `b == 64`.
    pub fn block_size(&self) -> u64 {
        1u64.checked_shl(self.block_bits).unwrap_or(u64::MAX)
    }
}

impl std::fmt::Display for CacheGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s={} E={} b={} ({} sets x {} lines, {}-byte blocks)",
            self.set_bits,
            self.lines_per_set,
            self.block_bits,
            self.num_sets(),
            self.lines_per_set,
            self.block_size()
        )
    }
}
