//! Trace Loader.
//!
//! Reads a trace file from disk and turns it into access records. Failures
//! are returned to the caller rather than terminating the process.

use super::trace::parse_trace;
use crate::common::{TraceError, TraceRecord};
use log::info;
use std::fs;
use std::path::Path;

/// Loads and parses a trace file.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<TraceRecord>, TraceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_trace(&text)?;
    info!(
        "[Loader] {} data accesses from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
