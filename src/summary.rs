//! Aggregation of per-file results into the per-flag report payload.

use crate::models::{FileRefs, FlagSummary, ScanResult, Summary};

/// Fold a `ScanResult` into per-flag totals.
///
/// Flags appear in `flags` order, zero-count entries included; per-flag file
/// lists keep discovery order. Line lists are sorted ascending for display.
/// When the flag list contains duplicates, matches are credited to the first
/// entry with that name, so duplicated flags over-count the grand total.
pub fn summarize(result: &ScanResult, flags: &[String]) -> Summary {
    let mut summaries: Vec<FlagSummary> = flags
        .iter()
        .map(|f| FlagSummary {
            flag: f.clone(),
            total_references: 0,
            files_with_flag: 0,
            files: Vec::new(),
        })
        .collect();

    for file in &result.files {
        for fm in &file.flags {
            if let Some(entry) = summaries.iter_mut().find(|s| s.flag == fm.flag) {
                entry.total_references += fm.result.count;
                entry.files_with_flag += 1;
                let mut lines = fm.result.lines.clone();
                lines.sort_unstable();
                entry.files.push(FileRefs {
                    path: file.path.clone(),
                    references: fm.result.count,
                    lines,
                });
            }
        }
    }

    let total_references = summaries.iter().map(|s| s.total_references).sum();
    let flags_with_references = summaries
        .iter()
        .filter(|s| s.total_references > 0)
        .count();

    Summary {
        flags: summaries,
        total_references,
        files_matched: result.files.len(),
        flags_with_references,
    }
}
