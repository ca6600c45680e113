//! Test module organization.
//!
//! This module organizes all integration tests for the cache simulator.

/// Cache model and replacement policy tests.
mod cache_tests;





/// Trace parsing and loading tests.
mod trace_tests;
