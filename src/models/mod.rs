//! Shared data models for scan results, summaries, and the flag manifest.

pub mod manifest;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// Matches produced by one pattern template for one flag in one file.
pub struct PatternHit {
    /// Index of the pattern template that produced these matches.
    pub pattern: usize,
    pub count: usize,
    /// The matched substrings, in document order.
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Per-(file, flag) extraction result.
///
/// `count` is the sum across all pattern templates. Templates overlap on
/// purpose, so a single occurrence can contribute to more than one template;
/// the total is a signal-strength indicator, not a unique-occurrence count.
/// `lines` is collected independently: every 1-based line number whose raw
/// text contains the flag as a plain substring.
pub struct FlagFileResult {
    pub count: usize,
    pub hits: Vec<PatternHit>,
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
/// A flag's matches within one file.
pub struct FlagMatches {
    pub flag: String,
    #[serde(flatten)]
    pub result: FlagFileResult,
}

#[derive(Debug, Clone, Serialize)]
/// One scanned file with at least one flag match. `flags` follows manifest
/// order and holds only flags with a nonzero count in this file.
pub struct FileMatches {
    pub path: String,
    pub flags: Vec<FlagMatches>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Full scan output: matched files in discovery order plus entries that
/// could not be read and were excluded from the totals.
pub struct ScanResult {
    pub files: Vec<FileMatches>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Clone, Serialize)]
/// A directory or file excluded from the scan because it could not be read.
pub struct SkippedEntry {
    pub path: String,
    /// "dir" or "file".
    pub kind: String,
    pub reason: String,
}

impl SkippedEntry {
    /// Record a recovered error under the given display path.
    pub fn from_error(display_path: String, err: &crate::error::ScanError) -> Self {
        use crate::error::ScanError;
        let (kind, reason) = match err {
            ScanError::Discovery { source, .. } => ("dir", source.to_string()),
            ScanError::FileRead { source, .. } => ("file", source.to_string()),
            ScanError::Configuration(msg) => ("config", msg.clone()),
        };
        Self {
            path: display_path,
            kind: kind.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Per-file reference record inside a flag summary.
pub struct FileRefs {
    pub path: String,
    pub references: usize,
    /// Sorted ascending for display.
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Aggregated references for a single flag across the tree.
pub struct FlagSummary {
    pub flag: String,
    pub total_references: usize,
    pub files_with_flag: usize,
    /// Per-file breakdown in discovery order.
    pub files: Vec<FileRefs>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// The full report payload: one entry per manifest flag (zero counts
/// included) plus grand totals.
pub struct Summary {
    pub flags: Vec<FlagSummary>,
    pub total_references: usize,
    /// Distinct files with at least one match for any flag.
    pub files_matched: usize,
    pub flags_with_references: usize,
}
