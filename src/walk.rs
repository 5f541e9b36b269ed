//! File discovery: worklist-based directory descent with name pruning.
//!
//! Directories whose name starts with a dot and directories on the exclusion
//! list are never descended into. Files are included when their name ends
//! with one of the configured suffixes. An unreadable directory is recorded
//! as skipped and its subtree excluded; the walk continues.

use crate::error::ScanError;
use crate::models::SkippedEntry;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
/// Name-based filters applied during discovery.
pub struct WalkOptions {
    /// File-name suffixes, e.g. ".js". Matched with `ends_with`, so
    /// compound suffixes like ".test.ts" work too.
    pub extensions: Vec<String>,
    /// Directory names pruned entirely (dependency caches by default).
    pub exclude_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            extensions: [".js", ".jsx", ".ts", ".tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_dirs: vec!["node_modules".to_string(), "target".to_string()],
        }
    }
}

#[derive(Debug, Default)]
/// Discovered files in traversal order plus entries that could not be read.
pub struct WalkOutcome {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedEntry>,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn matches_suffix(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Walk `root` depth-first with an explicit worklist (bounded stack on deep
/// trees). Within a directory, matching files are emitted in listing order
/// before any subdirectory is visited.
pub fn walk_files(root: &Path, opts: &WalkOptions) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    let mut worklist: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = worklist.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(rd) => rd,
            Err(e) => {
                let err = ScanError::Discovery {
                    path: dir.clone(),
                    source: e,
                };
                outcome
                    .skipped
                    .push(SkippedEntry::from_error(dir.to_string_lossy().to_string(), &err));
                continue;
            }
        };

        let mut subdirs: Vec<PathBuf> = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => {
                    if !is_hidden(&name) && !opts.exclude_dirs.iter().any(|d| d == &name) {
                        subdirs.push(path);
                    }
                }
                Ok(meta) if meta.is_file() => {
                    if matches_suffix(&name, &opts.extensions) {
                        outcome.files.push(path);
                    }
                }
                // Neither file nor dir (fifo, socket); nothing to scan.
                Ok(_) => {}
                Err(e) => {
                    let err = ScanError::FileRead {
                        path: path.clone(),
                        source: e,
                    };
                    outcome
                        .skipped
                        .push(SkippedEntry::from_error(path.to_string_lossy().to_string(), &err));
                }
            }
        }
        // Reverse so the stack yields subdirectories in listing order.
        subdirs.reverse();
        worklist.extend(subdirs);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_extension_filter_and_recursion() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.js"));
        touch(&root.join("b.txt"));
        touch(&root.join("nested/deep/c.tsx"));
        let out = walk_files(root, &WalkOptions::default());
        let names: Vec<String> = out
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert!(names.contains(&"a.js".to_string()));
        assert!(names.contains(&"c.tsx".to_string()));
        assert!(!names.contains(&"b.txt".to_string()));
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_hidden_and_excluded_dirs_are_pruned() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join(".git/secret.js"));
        touch(&root.join("node_modules/pkg/index.js"));
        touch(&root.join("src/ok.js"));
        let out = walk_files(root, &WalkOptions::default());
        assert_eq!(out.files.len(), 1);
        assert!(out.files[0].ends_with("src/ok.js"));
    }

    #[test]
    fn test_hidden_files_are_not_pruned() {
        // Only directories are pruned on the leading dot.
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join(".eslintrc.js"));
        let out = walk_files(root, &WalkOptions::default());
        assert_eq!(out.files.len(), 1);
    }

    #[test]
    fn test_custom_exclude_list() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("dist/bundle.js"));
        touch(&root.join("src/main.js"));
        let opts = WalkOptions {
            exclude_dirs: vec!["dist".to_string()],
            ..WalkOptions::default()
        };
        let out = walk_files(root, &opts);
        assert_eq!(out.files.len(), 1);
        assert!(out.files[0].ends_with("src/main.js"));
    }

    #[test]
    fn test_files_before_subdirs_within_a_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("sub/inner.js"));
        touch(&root.join("top.js"));
        let out = walk_files(root, &WalkOptions::default());
        assert_eq!(out.files.len(), 2);
        assert!(out.files[0].ends_with("top.js"));
        assert!(out.files[1].ends_with("sub/inner.js"));
    }
}
