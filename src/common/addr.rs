//! Address Decoding.
//!
//! Splits a 64-bit memory address into the fields a set-associative cache
//! indexes by:
//!
//! ```text
//! | tag (64 - s - b bits) | set index (s bits) | block offset (b bits) |
//! ```

use crate::config::CacheGeometry;

/// A 64-bit memory address as it appears in a trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address(u64);

/// The cache-relevant fields of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddress {
    /// High-order bits identifying the memory block.
    pub tag: u64,
    /// Index of the set the block maps to.
    pub set: usize,
}

impl Address {
    /// Wraps a raw address value.
    pub const fn new(val: u64) -> Self {
        Self(val)
    }

    /// Returns the raw address value.
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the byte offset within the block.
    pub fn block_offset(&self, geometry: &CacheGeometry) -> u64 {
        self.0 & low_mask(geometry.block_bits())
    }

    /// Decodes the address into `(tag, set)` for the given geometry.
    ///
    /// `tag = addr >> (s + b)` and `set = (addr >> b) mod 2^s`. A shift by the
    /// full 64 bits yields zero rather than overflowing.
    pub fn decode(&self, geometry: &CacheGeometry) -> DecodedAddress {
        let s = geometry.set_bits();
        let b = geometry.block_bits();

        let tag = shr(self.0, s + b);
        let set = shr(self.0, b) & low_mask(s);

        DecodedAddress {
            tag,
            set: set as usize,
        }
    }
}

impl From<u64> for Address {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl std::fmt::LowerHex for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

fn shr(val: u64, bits: u32) -> u64 {
    val.checked_shr(bits).unwrap_or(0)
}

fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}
