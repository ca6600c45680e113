//! Common types used throughout the cache simulator.
//!
//! This module provides the address decoder, the access record replayed from
//! a trace, and the error types shared by the configuration, trace and
//! simulation layers.

/// Address type and tag/set decoding.
pub mod addr;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{Address, DecodedAddress};
pub use data::{AccessKind, TraceRecord};
pub use error::{ConfigError, SimError, TraceError};
