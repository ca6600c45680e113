//! Trace Parsing.
//!
//! Traces use the valgrind `--tool=lackey --trace-mem=yes` line format:
//!
//! ```text
//! I 0400d7d4,8
//!  L 7ff0005b8,8
//!  S 7ff0005b0,8
//!  M 0421c7f0,4
//! ```
//!
//! `I` lines are instruction fetches and have no effect on a data cache; they
//! are dropped here so the simulator never sees them.

use crate::common::{AccessKind, TraceError, TraceRecord};
use log::warn;

/// Parses one trace line.
///
/// `line_no` is 1-based and used only for error reporting. Returns `Ok(None)`
/// for blank lines and instruction fetches.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<TraceRecord>, TraceError> {
    let trimmed = line.trim();
    let malformed = || TraceError::Malformed {
        line: line_no,
        content: trimmed.to_string(),
    };

    let mut chars = trimmed.chars();
    let op = match chars.next() {
        None => return Ok(None),
        Some('I') => return Ok(None),
        Some(c) => c,
    };

    let kind = AccessKind::from_mnemonic(op).ok_or(TraceError::UnknownOperation {
        line: line_no,
        op,
    })?;

    let operand = chars.as_str().trim_start();

    let (addr_str, size_str) = match operand.split_once(',') {
        Some((a, s)) => (a.trim(), Some(s.trim())),
        None => (operand, None),
    };

    let addr_str = addr_str
        .strip_prefix("0x")
        .or_else(|| addr_str.strip_prefix("0X"))
        .unwrap_or(addr_str);
    let address = u64::from_str_radix(addr_str, 16).map_err(|_| malformed())?;

    let size = match size_str {
        Some(s) => s.parse::<u32>().map_err(|_| malformed())?,
        None => {
            warn!("line {line_no}: no access size given, assuming 1");
            1
        }
    };

    Ok(Some(TraceRecord::new(kind, address).with_size(size)))
}

/// Parses a whole trace, stopping at the first bad line.
pub fn parse_trace(text: &str) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(record) = parse_line(idx + 1, line)? {
            records.push(record);
        }
    }
    Ok(records)
}
