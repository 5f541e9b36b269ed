//! Manifest schema: the ordered list of flag keys to count, plus optional
//! scan settings that travel with the manifest.

use crate::error::ScanError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
/// Top-level manifest loaded from `flags.toml`.
pub struct Manifest {
    /// Flag keys in report order. Duplicates are processed independently.
    #[serde(default)]
    pub flags: Vec<String>,
    /// Optional flag to spotlight with its own breakdown after the totals.
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub scan: Option<ManifestScan>,
}

#[derive(Debug, Default, Deserialize)]
/// `[scan]` section of the manifest.
pub struct ManifestScan {
    /// Directory to scan, relative to the repo root.
    pub dir: Option<String>,
    /// File-name suffixes to include, e.g. ".ts".
    pub extensions: Option<Vec<String>>,
    /// Directory names pruned entirely during discovery.
    pub exclude_dirs: Option<Vec<String>>,
}

/// Load and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, ScanError> {
    let s = fs::read_to_string(path).map_err(|e| {
        ScanError::Configuration(format!(
            "manifest not found: {} ({})",
            path.to_string_lossy(),
            e
        ))
    })?;
    toml::from_str(&s).map_err(|e| {
        ScanError::Configuration(format!(
            "manifest is not valid TOML: {} ({})",
            path.to_string_lossy(),
            e
        ))
    })
}
