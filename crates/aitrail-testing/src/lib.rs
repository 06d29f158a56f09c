//! Shared fixtures for aitrail tests.
//!
//! Provides in-memory record constructors and an on-disk session directory
//! builder so integration tests can generate realistic JSONL logs without
//! hand-writing JSON strings.

pub mod fixtures;

pub use fixtures::*;
