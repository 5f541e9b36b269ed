//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "flagscan",
    version,
    about = "Count feature-flag references in a source tree",
    long_about = "flagscan — a small, fast CLI that counts references to feature-flag keys across a source tree and reports per-flag totals.\n\nConfiguration precedence: CLI > flagscan.toml > defaults.",
    after_help = "Examples:\n  flagscan scan\n  flagscan scan --manifest conf/flags.toml --output json\n  flagscan scan --flag dark-mode --flag social-login --export\n  flagscan scan --dir app --ext ts --ext tsx --strict",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current flagscan version.")]
    Version,
    /// Scan a source tree and report flag references
    #[command(
        about = "Scan for flag references",
        long_about = "Walk the scan directory, count pattern matches for every configured flag, and print a per-flag report. Flags come from the manifest unless --flag is given.",
        after_help = "Examples:\n  flagscan scan --repo-root ../app\n  flagscan scan --output json\n  flagscan scan --focus dark-mode --export"
    )]
    Scan {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Path to the flag manifest (default: flags.toml)")]
        manifest: Option<String>,
        #[arg(
            long = "flag",
            help = "Flag key to count; repeatable. Overrides the manifest list"
        )]
        flags: Vec<String>,
        #[arg(long, help = "Directory to scan, relative to the repo root (default: src)")]
        dir: Option<String>,
        #[arg(
            long = "ext",
            help = "File suffix to include, e.g. '.ts'; repeatable. Overrides defaults"
        )]
        extensions: Vec<String>,
        #[arg(
            long = "exclude-dir",
            help = "Directory name to prune; repeatable. Overrides defaults"
        )]
        exclude_dirs: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Flag to spotlight with its own breakdown")]
        focus: Option<String>,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Append the JSON payload after the human report"
        )]
        export: bool,
        #[arg(
            long,
            action = clap::ArgAction::SetTrue,
            help = "Exit non-zero when any file or directory was skipped"
        )]
        strict: bool,
    },
}
