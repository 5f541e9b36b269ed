//! flagscan core library.
//!
//! This crate exposes programmatic APIs for counting references to
//! feature-flag keys (or any opaque identifiers) across a source tree and
//! aggregating them into a per-flag report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `walk`: File discovery with hidden/excluded directory pruning.
//! - `extract`: Pattern-template matching for one flag in one file.
//! - `scan`: The discovery → extraction → pruning pipeline.
//! - `summary`: Aggregation into per-flag totals.
//! - `models`: Data models for the manifest and result structs.
//! - `output`: Human/JSON report printers.
//! - `error`: Error taxonomy.
//! - `util`: Supporting helpers.
//!
//! Counting caveat: the pattern templates overlap on purpose, so totals are
//! a signal-strength measure rather than unique occurrences; see `extract`.
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod scan;
pub mod summary;
pub mod util;
pub mod walk;
