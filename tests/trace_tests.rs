//! Integration tests for trace parsing and loading.

use cache_sim::common::{AccessKind, TraceError, TraceRecord};
use cache_sim::sim::loader::load_trace;
use cache_sim::sim::trace::{parse_line, parse_trace};
use std::io::Write;

/// Tests the three data access kinds.
#[test]
fn test_parse_data_accesses() {
    assert_eq!(
        parse_line(1, " L 10,1").unwrap(),
        Some(TraceRecord::load(0x10))
    );
    assert_eq!(
        parse_line(1, " S 7ff0005b0,8").unwrap(),
        Some(TraceRecord::store(0x7ff0005b0).with_size(8))
    );
    assert_eq!(
        parse_line(1, " M 0421c7f0,4").unwrap(),
        Some(TraceRecord::modify(0x0421c7f0).with_size(4))
    );
}

/// Tests instruction fetches and blank lines are dropped.
#[test]
fn test_parse_skips_non_data() {
    assert_eq!(parse_line(1, "I 0400d7d4,8").unwrap(), None);
    assert_eq!(parse_line(2, "").unwrap(), None);
    assert_eq!(parse_line(3, "   \t").unwrap(), None);
}

/// Tests optional address prefix and missing size.
#[test]
fn test_parse_lenient_forms() {
    let record = parse_line(1, "L 0x1F,2").unwrap().unwrap();
    assert_eq!(record.address.val(), 0x1F);
    assert_eq!(record.size, 2);

    let record = parse_line(1, "S ff").unwrap().unwrap();
    assert_eq!(record.kind, AccessKind::Store);
    assert_eq!(record.size, 1);
}

/// Tests the space after the operation letter is optional.
#[test]
fn test_parse_without_separator() {
    assert_eq!(parse_line(1, "L10,1").unwrap(), Some(TraceRecord::load(0x10)));
    assert_eq!(
        parse_line(1, " M7ff0,8").unwrap(),
        Some(TraceRecord::modify(0x7ff0).with_size(8))
    );
}

/// Tests malformed lines report their line number.
#[test]
fn test_parse_malformed() {
    for bad in [" L zz,1", " L", " Lzz,1", " S 10,x", " M ,4"] {
        match parse_line(7, bad) {
            Err(TraceError::Malformed { line, .. }) => assert_eq!(line, 7, "{bad:?}"),
            other => panic!("expected malformed for {bad:?}, got {other:?}"),
        }
    }
}

/// Tests unknown operation letters.
#[test]
fn test_parse_unknown_operation() {
    assert!(matches!(
        parse_line(4, " X 10,1"),
        Err(TraceError::UnknownOperation { line: 4, op: 'X' })
    ));
}

/// Tests a whole trace is parsed in order with fetches removed.
#[test]
fn test_parse_trace() {
    let text = "I 0400d7d4,8\n M 0421c7f0,4\n L 04f6b868,8\n\n S 7ff0005c8,8\n";
    let records = parse_trace(text).unwrap();

    let kinds: Vec<AccessKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![AccessKind::Modify, AccessKind::Load, AccessKind::Store]
    );
}

/// Tests the first bad line aborts parsing.
#[test]
fn test_parse_trace_error_line() {
    let err = parse_trace(" L 10,1\n L 20,1\n Q 30,1\n").unwrap_err();
    assert!(matches!(err, TraceError::UnknownOperation { line: 3, .. }));
}

/// Tests loading a trace from disk.
#[test]
fn test_load_trace() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, " L 10,1\n M 20,1\nI 400,4\n").unwrap();

    let records = load_trace(file.path()).unwrap();

    assert_eq!(
        records,
        vec![TraceRecord::load(0x10), TraceRecord::modify(0x20)]
    );
}

/// Tests a missing trace file is an error, not a process exit.
#[test]
fn test_load_missing_trace() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_trace(dir.path().join("missing.trace")).unwrap_err();

    assert!(matches!(err, TraceError::Io { .. }));
    assert!(err.to_string().contains("missing.trace"));
}
