//! Configuration discovery and effective settings resolution.
//!
//! flagscan reads `flagscan.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags into an `Effective`
//! config. Defaults:
//! - `manifest`: `flags.toml`
//! - `output`: `human`
//! - `scan.dir`: `src`
//!
//! Overrides precedence: CLI > config file > defaults. Extensions and
//! excluded directory names resolve one level deeper: CLI > config file >
//! manifest `[scan]` section > built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Scan-related configuration section under `[scan]`.
pub struct ScanCfg {
    pub dir: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `flagscan.toml|yaml`.
pub struct FlagscanConfig {
    pub manifest: Option<String>,
    pub output: Option<String>,
    pub focus: Option<String>,
    #[serde(default)]
    pub scan: Option<ScanCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub manifest: String,
    pub output: String,
    pub focus: Option<String>,
    pub scan_dir: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `flagscan.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("flagscan.toml").exists()
            || cur.join("flagscan.yaml").exists()
            || cur.join("flagscan.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FlagscanConfig` from `flagscan.toml` or `flagscan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<FlagscanConfig> {
    let toml_path = root.join("flagscan.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: FlagscanConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["flagscan.yaml", "flagscan.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: FlagscanConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_manifest: Option<&str>,
    cli_output: Option<&str>,
    cli_focus: Option<&str>,
    cli_dir: Option<&str>,
    cli_extensions: &[String],
    cli_exclude_dirs: &[String],
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let manifest = cli_manifest
        .map(|s| s.to_string())
        .or(cfg.manifest)
        .unwrap_or_else(|| "flags.toml".to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let focus = cli_focus.map(|s| s.to_string()).or(cfg.focus);

    let scan_dir = cli_dir
        .map(|s| s.to_string())
        .or_else(|| cfg.scan.as_ref().and_then(|s| s.dir.clone()));

    let extensions = if cli_extensions.is_empty() {
        cfg.scan.as_ref().and_then(|s| s.extensions.clone())
    } else {
        Some(cli_extensions.to_vec())
    }
    .map(|exts| exts.iter().map(|e| normalize_extension(e)).collect());

    let exclude_dirs = if cli_exclude_dirs.is_empty() {
        cfg.scan.as_ref().and_then(|s| s.exclude_dirs.clone())
    } else {
        Some(cli_exclude_dirs.to_vec())
    };

    Effective {
        repo_root,
        manifest,
        output,
        focus,
        scan_dir,
        extensions,
        exclude_dirs,
    }
}

/// Accept both `ts` and `.ts` forms from the CLI and config files.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
