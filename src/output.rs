//! Report rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs, plus an export mode that
//! appends the JSON payload after the human report. Rendering is split into
//! pure `compose_*` functions so tests can snapshot the exact bytes.

use crate::models::{SkippedEntry, Summary};
use chrono::{SecondsFormat, Utc};
use owo_colors::OwoColorize;
use serde_json::{json, Map, Value as JsonVal};
use std::fmt::Write as _;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the scan report in the requested format. `export` appends the JSON
/// payload after the human report, mirroring the JSON-only mode.
pub fn print_scan(
    summary: &Summary,
    skipped: &[SkippedEntry],
    output: &str,
    export: bool,
    focus: Option<&str>,
) {
    match output {
        "json" => {
            let payload = compose_scan_json(summary, skipped, &scan_date());
            println!("{}", serde_json::to_string_pretty(&payload).unwrap());
        }
        _ => {
            let color = use_colors(output);
            print!("{}", compose_report(summary, skipped, focus, color));
            if export {
                let payload = compose_scan_json(summary, skipped, &scan_date());
                println!();
                println!("{}", serde_json::to_string_pretty(&payload).unwrap());
            }
        }
    }
}

fn scan_date() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn fmt_lines(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the human report. Pure: same inputs give byte-identical output.
///
/// Flags with zero references are omitted from the body but every flag still
/// participates in the totals footer.
pub fn compose_report(
    summary: &Summary,
    skipped: &[SkippedEntry],
    focus: Option<&str>,
    color: bool,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(50);
    let _ = writeln!(out, "Feature flag reference summary");
    let _ = writeln!(out, "{rule}");

    for fs in summary.flags.iter().filter(|f| f.total_references > 0) {
        let name = if color {
            fs.flag.bold().to_string()
        } else {
            fs.flag.clone()
        };
        let _ = writeln!(out, "\n{name}:");
        let _ = writeln!(out, "  total references: {}", fs.total_references);
        let _ = writeln!(out, "  files with flag: {}", fs.files_with_flag);
        for file in &fs.files {
            let _ = writeln!(
                out,
                "    {}: {} references (lines: {})",
                file.path,
                file.references,
                fmt_lines(&file.lines)
            );
        }
    }

    let _ = writeln!(out, "\n{rule}");
    let footer = format!(
        "total references: {}\nfiles matched: {}\nflags with references: {}",
        summary.total_references, summary.files_matched, summary.flags_with_references
    );
    if color {
        let _ = writeln!(out, "{}", footer.bold());
    } else {
        let _ = writeln!(out, "{footer}");
    }

    if let Some(focus_flag) = focus {
        if let Some(fs) = summary
            .flags
            .iter()
            .find(|f| f.flag == focus_flag && f.total_references > 0)
        {
            let _ = writeln!(out, "\nfocus: {}", fs.flag);
            let _ = writeln!(out, "{}", "=".repeat(40));
            let _ = writeln!(out, "  total references: {}", fs.total_references);
            let _ = writeln!(out, "  files: {}", fs.files_with_flag);
            for file in &fs.files {
                let _ = writeln!(out, "  - {}: {} references", file.path, file.references);
            }
        }
    }

    if !skipped.is_empty() {
        let header = format!("\nskipped ({}):", skipped.len());
        if color {
            let _ = writeln!(out, "{}", header.yellow().bold());
        } else {
            let _ = writeln!(out, "{header}");
        }
        for s in skipped {
            let _ = writeln!(out, "  {} [{}]: {}", s.path, s.kind, s.reason);
        }
    }

    out
}

/// Compose the JSON payload (pure, for tests). The `summary` object is keyed
/// by flag name in flag-list order and includes zero-count flags.
pub fn compose_scan_json(
    summary: &Summary,
    skipped: &[SkippedEntry],
    scan_date: &str,
) -> JsonVal {
    let mut per_flag = Map::new();
    for fs in &summary.flags {
        per_flag.insert(
            fs.flag.clone(),
            json!({
                "totalReferences": fs.total_references,
                "filesWithFlag": fs.files_with_flag,
                "files": fs.files,
            }),
        );
    }
    json!({
        "summary": per_flag,
        "totalReferences": summary.total_references,
        "filesMatched": summary.files_matched,
        "flagsWithReferences": summary.flags_with_references,
        "scanDate": scan_date,
        "skipped": skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileRefs, FlagSummary};

    fn sample_summary() -> Summary {
        Summary {
            flags: vec![
                FlagSummary {
                    flag: "dark-mode".into(),
                    total_references: 3,
                    files_with_flag: 2,
                    files: vec![
                        FileRefs {
                            path: "src/a.js".into(),
                            references: 2,
                            lines: vec![1, 4],
                        },
                        FileRefs {
                            path: "src/b.js".into(),
                            references: 1,
                            lines: vec![9],
                        },
                    ],
                },
                FlagSummary {
                    flag: "absent".into(),
                    total_references: 0,
                    files_with_flag: 0,
                    files: Vec::new(),
                },
            ],
            total_references: 3,
            files_matched: 2,
            flags_with_references: 1,
        }
    }

    #[test]
    fn test_report_lists_nonzero_flags_only() {
        let report = compose_report(&sample_summary(), &[], None, false);
        assert!(report.contains("dark-mode:"));
        assert!(!report.contains("absent:"));
        assert!(report.contains("src/a.js: 2 references (lines: 1, 4)"));
        assert!(report.contains("total references: 3"));
        assert!(report.contains("flags with references: 1"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let s = sample_summary();
        let a = compose_report(&s, &[], None, false);
        let b = compose_report(&s, &[], None, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_focus_section_present_when_requested() {
        let report = compose_report(&sample_summary(), &[], Some("dark-mode"), false);
        assert!(report.contains("focus: dark-mode"));
        assert!(report.contains("- src/a.js: 2 references"));
        // A focus flag with zero references stays silent.
        let silent = compose_report(&sample_summary(), &[], Some("absent"), false);
        assert!(!silent.contains("focus:"));
    }

    #[test]
    fn test_skipped_section() {
        let skipped = vec![SkippedEntry {
            path: "src/bad.js".into(),
            kind: "file".into(),
            reason: "stream did not contain valid UTF-8".into(),
        }];
        let report = compose_report(&sample_summary(), &skipped, None, false);
        assert!(report.contains("skipped (1):"));
        assert!(report.contains("src/bad.js [file]"));
    }

    #[test]
    fn test_compose_scan_json_shape() {
        let payload = compose_scan_json(&sample_summary(), &[], "2024-01-01T00:00:00Z");
        assert_eq!(payload["summary"]["dark-mode"]["totalReferences"], 3);
        assert_eq!(payload["summary"]["dark-mode"]["filesWithFlag"], 2);
        assert_eq!(payload["summary"]["absent"]["totalReferences"], 0);
        assert_eq!(payload["totalReferences"], 3);
        assert_eq!(payload["flagsWithReferences"], 1);
        assert_eq!(payload["scanDate"], "2024-01-01T00:00:00Z");
        assert!(payload["skipped"].as_array().unwrap().is_empty());
        // Flag-list order is preserved in the summary object.
        let keys: Vec<&String> = payload["summary"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["dark-mode", "absent"]);
    }

    #[test]
    fn test_json_file_records_use_camel_case() {
        let payload = compose_scan_json(&sample_summary(), &[], "2024-01-01T00:00:00Z");
        let file = &payload["summary"]["dark-mode"]["files"][0];
        assert_eq!(file["path"], "src/a.js");
        assert_eq!(file["references"], 2);
        assert_eq!(file["lines"][0], 1);
    }
}
