//! flagscan CLI binary entry point.
//! Resolves configuration, runs the scan pipeline, and prints the report.

use clap::Parser;
use flagscan::cli::{Cli, Commands};
use flagscan::models::manifest;
use flagscan::scan::{run_scan, ScanOptions};
use flagscan::walk::WalkOptions;
use flagscan::{config, output, summary, util};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Scan {
            repo_root,
            manifest: manifest_cli,
            flags,
            dir,
            extensions,
            exclude_dirs,
            output: output_cli,
            focus,
            export,
            strict,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                manifest_cli.as_deref(),
                output_cli.as_deref(),
                focus.as_deref(),
                dir.as_deref(),
                &extensions,
                &exclude_dirs,
            );
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    util::note_prefix(),
                    "No flagscan.toml found; using defaults."
                );
            }

            // --flag skips the manifest entirely; otherwise the manifest is
            // the source of truth for the flag list and scan defaults.
            let manifest_path = eff.repo_root.join(&eff.manifest);
            let (flag_list, manifest_scan, manifest_focus) = if flags.is_empty() {
                match manifest::load_manifest(&manifest_path) {
                    Ok(m) => (m.flags, m.scan, m.focus),
                    Err(e) => {
                        eprintln!("{} {}", util::error_prefix(), e);
                        std::process::exit(2);
                    }
                }
            } else {
                (flags, None, None)
            };
            if flag_list.is_empty() {
                eprintln!(
                    "{} {}",
                    util::error_prefix(),
                    "No flags configured. Add a flags list to the manifest or pass --flag."
                );
                std::process::exit(2);
            }

            let defaults = WalkOptions::default();
            let extensions = eff
                .extensions
                .clone()
                .or_else(|| manifest_scan.as_ref().and_then(|s| s.extensions.clone()))
                .map(|exts| {
                    exts.iter()
                        .map(|e| config::normalize_extension(e))
                        .collect()
                })
                .unwrap_or(defaults.extensions);
            let exclude_dirs = eff
                .exclude_dirs
                .clone()
                .or_else(|| manifest_scan.as_ref().and_then(|s| s.exclude_dirs.clone()))
                .unwrap_or(defaults.exclude_dirs);
            let scan_dir = eff
                .scan_dir
                .clone()
                .or_else(|| manifest_scan.as_ref().and_then(|s| s.dir.clone()))
                .unwrap_or_else(|| "src".to_string());
            let focus = eff.focus.clone().or(manifest_focus);

            let scan_root = eff.repo_root.join(&scan_dir);
            if eff.output != "json" {
                eprintln!(
                    "{} {}",
                    util::info_prefix(),
                    format!(
                        "Scanning {} for {} flags",
                        scan_root.to_string_lossy(),
                        flag_list.len()
                    )
                );
            }

            let opts = ScanOptions {
                flags: flag_list,
                extensions,
                exclude_dirs,
            };
            match run_scan(&scan_root, &eff.repo_root, &opts) {
                Ok(result) => {
                    let summary = summary::summarize(&result, &opts.flags);
                    output::print_scan(
                        &summary,
                        &result.skipped,
                        &eff.output,
                        export,
                        focus.as_deref(),
                    );
                    if strict && !result.skipped.is_empty() {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", util::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
    }
}
