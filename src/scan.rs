//! Scan pipeline: discovery, per-file extraction, pruning.
//!
//! Files are independent, so extraction runs on the rayon pool; the
//! order-preserving collect keeps results in discovery order, which makes
//! repeated scans of an unchanged tree render identical reports.

use crate::error::ScanError;
use crate::extract::{self, FlagPatterns};
use crate::models::{FileMatches, FlagMatches, ScanResult, SkippedEntry};
use crate::walk::{self, WalkOptions};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
/// Everything the pipeline needs besides the root paths.
pub struct ScanOptions {
    /// Flag keys in report order.
    pub flags: Vec<String>,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
}

/// Run the full pipeline under `scan_root`. Paths in the result are made
/// relative to `display_root` when possible.
pub fn run_scan(
    scan_root: &Path,
    display_root: &Path,
    opts: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    if opts.flags.is_empty() {
        return Err(ScanError::Configuration(
            "no flags configured; add them to the manifest or pass --flag".to_string(),
        ));
    }
    if !scan_root.is_dir() {
        return Err(ScanError::Configuration(format!(
            "scan root is not a directory: {}",
            scan_root.display()
        )));
    }

    let patterns: Vec<FlagPatterns> = opts
        .flags
        .iter()
        .map(|f| FlagPatterns::compile(f))
        .collect();

    let walk_opts = WalkOptions {
        extensions: opts.extensions.clone(),
        exclude_dirs: opts.exclude_dirs.clone(),
    };
    let outcome = walk::walk_files(scan_root, &walk_opts);
    let mut skipped = outcome.skipped;

    let per_file: Vec<Result<Option<FileMatches>, SkippedEntry>> = outcome
        .files
        .par_iter()
        .map(|path| scan_file(path, display_root, &patterns))
        .collect();

    let mut files: Vec<FileMatches> = Vec::new();
    for item in per_file {
        match item {
            Ok(Some(fm)) => files.push(fm),
            Ok(None) => {}
            Err(skip) => skipped.push(skip),
        }
    }

    Ok(ScanResult { files, skipped })
}

/// Extract every flag from one file. `Ok(None)` means the file was readable
/// but matched nothing and is pruned from the result.
fn scan_file(
    path: &Path,
    display_root: &Path,
    patterns: &[FlagPatterns],
) -> Result<Option<FileMatches>, SkippedEntry> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let err = ScanError::FileRead {
                path: path.to_path_buf(),
                source: e,
            };
            return Err(SkippedEntry::from_error(
                display_path(path, display_root),
                &err,
            ));
        }
    };

    let mut flags: Vec<FlagMatches> = Vec::new();
    for pats in patterns {
        let result = extract::extract(&content, pats);
        if result.count > 0 {
            flags.push(FlagMatches {
                flag: pats.flag().to_string(),
                result,
            });
        }
    }

    if flags.is_empty() {
        Ok(None)
    } else {
        Ok(Some(FileMatches {
            path: display_path(path, display_root),
            flags,
        }))
    }
}

/// Root-relative display path; falls back to the absolute path when the file
/// sits outside `display_root`.
pub fn display_path(path: &Path, display_root: &Path) -> String {
    pathdiff::diff_paths(path, display_root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn opts(flags: &[&str]) -> ScanOptions {
        ScanOptions {
            flags: flags.iter().map(|s| s.to_string()).collect(),
            extensions: vec![".js".to_string()],
            exclude_dirs: vec!["node_modules".to_string()],
        }
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let p = root.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, content).unwrap();
    }

    #[test]
    fn test_two_files_one_match_each() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/a.js", "const k = 'dark-mode';\n");
        write(root, "src/b.js", "const k = 'dark-mode';\n");
        let res = run_scan(&root.join("src"), root, &opts(&["dark-mode"])).unwrap();
        assert_eq!(res.files.len(), 2);
        for f in &res.files {
            assert_eq!(f.flags.len(), 1);
            assert_eq!(f.flags[0].result.count, 1);
        }
    }

    #[test]
    fn test_files_without_matches_are_pruned() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/empty.js", "nothing here\n");
        write(root, "src/hit.js", "useFeature('dark-mode')\n");
        let res = run_scan(&root.join("src"), root, &opts(&["dark-mode"])).unwrap();
        assert_eq!(res.files.len(), 1);
        assert_eq!(res.files[0].path, "src/hit.js");
    }

    #[test]
    fn test_undecodable_file_is_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/good.js", "'dark-mode'\n");
        fs::write(root.join("src/bad.js"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let res = run_scan(&root.join("src"), root, &opts(&["dark-mode"])).unwrap();
        assert_eq!(res.files.len(), 1);
        assert_eq!(res.files[0].path, "src/good.js");
        assert_eq!(res.skipped.len(), 1);
        assert_eq!(res.skipped[0].kind, "file");
        assert_eq!(res.skipped[0].path, "src/bad.js");
    }

    #[test]
    fn test_empty_flag_list_is_configuration_error() {
        let dir = tempdir().unwrap();
        let err = run_scan(dir.path(), dir.path(), &opts(&[])).unwrap_err();
        assert!(matches!(err, ScanError::Configuration(_)));
    }

    #[test]
    fn test_missing_root_is_configuration_error() {
        let dir = tempdir().unwrap();
        let err = run_scan(&dir.path().join("nope"), dir.path(), &opts(&["x"])).unwrap_err();
        assert!(matches!(err, ScanError::Configuration(_)));
    }

    #[test]
    fn test_pruned_directories_never_contribute() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/.hidden/a.js", "'dark-mode'\n");
        write(root, "src/node_modules/b.js", "'dark-mode'\n");
        write(root, "src/ok.js", "'dark-mode'\n");
        let res = run_scan(&root.join("src"), root, &opts(&["dark-mode"])).unwrap();
        assert_eq!(res.files.len(), 1);
        assert_eq!(res.files[0].path, "src/ok.js");
    }

    #[test]
    fn test_per_file_flag_order_follows_flag_list() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "src/a.js", "'beta' 'alpha'\n");
        let res = run_scan(&root.join("src"), root, &opts(&["alpha", "beta"])).unwrap();
        let order: Vec<&str> = res.files[0].flags.iter().map(|f| f.flag.as_str()).collect();
        assert_eq!(order, vec!["alpha", "beta"]);
    }
}
