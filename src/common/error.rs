//! Error Types.
//!
//! Configuration problems are detected before a cache is built; trace problems
//! are reported with the offending line. Neither terminates the process: the
//! binary decides what to do with them.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected cache geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("set index bits must be non-negative (got {0})")]
    NegativeSetBits(i64),

    #[error("block offset bits must be non-negative (got {0})")]
    NegativeBlockBits(i64),

    #[error("lines per set must be at least 1 (got {0})")]
    NonPositiveLines(i64),

    #[error("set index bits ({s}) plus block offset bits ({b}) exceed the 64-bit address width")]
    AddressWidth { s: i64, b: i64 },

    #[error("cache with 2^{s} sets of {lines} lines cannot be allocated on this host")]
    TooLarge { s: u32, lines: usize },

    #[error("missing required parameter `{0}`")]
    Missing(&'static str),

    #[error("could not read config '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("could not parse config '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Unreadable or malformed trace input.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("could not read trace '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed trace record `{content}`")]
    Malformed { line: usize, content: String },

    #[error("line {line}: unknown operation `{op}`")]
    UnknownOperation { line: usize, op: char },
}

/// Any failure surfaced by a simulation run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}
