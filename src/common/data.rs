//! Memory Access Types.
//!
//! This module defines the classification of memory accesses replayed by the
//! simulator. A trace is a sequence of these records; instruction fetches are
//! filtered out before a record is ever built.

use super::addr::Address;

/// Type of memory access operation.
///
/// Loads and stores touch the cache once. A modify is a load followed by a
/// store to the same address, so its second half always finds the line
/// resident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Data read access (`L`).
    Load,

    /// Data write access (`S`).
    Store,

    /// Read-modify-write access (`M`).
    Modify,
}

impl AccessKind {
    /// Returns the single-letter trace mnemonic.
    pub fn mnemonic(&self) -> char {
        match self {
            AccessKind::Load => 'L',
            AccessKind::Store => 'S',
            AccessKind::Modify => 'M',
        }
    }

    /// Parses a trace mnemonic. Returns `None` for anything other than `L`, `S`, `M`.
    pub fn from_mnemonic(c: char) -> Option<Self> {
        match c {
            'L' => Some(AccessKind::Load),
            'S' => Some(AccessKind::Store),
            'M' => Some(AccessKind::Modify),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// One replayable memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: AccessKind,
    pub address: Address,
    /// Access width in bytes as written in the trace. Not used for cache
    /// resolution; echoed in verbose output only.
    pub size: u32,
}

impl TraceRecord {
    /// Creates a record with a size of one byte.
    pub fn new(kind: AccessKind, address: u64) -> Self {
        Self {
            kind,
            address: Address::new(address),
            size: 1,
        }
    }

    pub fn load(address: u64) -> Self {
        Self::new(AccessKind::Load, address)
    }

    pub fn store(address: u64) -> Self {
        Self::new(AccessKind::Store, address)
    }

    pub fn modify(address: u64) -> Self {
        Self::new(AccessKind::Modify, address)
    }

    /// Returns a copy of the record carrying the given access size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

impl std::fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:x},{}", self.kind, self.address, self.size)
    }
}
