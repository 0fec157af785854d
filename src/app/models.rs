use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Parameters for a single dump run, after merging defaults, the rc file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the final artifact is saved; `out` is resolved against it.
    pub root: String,
    /// Folder to scan, resolved against the working directory.
    pub target: String,
    /// Output file name (relative to `root` unless absolute).
    pub out: String,
    /// Required filename suffix.
    pub ext: String,
    /// Optional substring the file path must contain.
    pub include: String,
    /// Comma-separated substrings that skip matching paths.
    pub exclude: String,
    /// Keep the leading `package` line in emitted content.
    pub keep_declaration_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            target: "./models".to_string(),
            out: "models_tree.txt".to_string(),
            ext: ".go".to_string(),
            include: String::new(),
            exclude: "_test.go,/.git/,/vendor/".to_string(),
            keep_declaration_line: false,
        }
    }
}

/// Represents a single file selected during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Relative to the working directory, always `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
    /// Hex SHA-256 of the bytes on disk, before any transformation.
    pub content_hash: String,
    pub size_bytes: u64,
}

/// Absolute locations a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub target: PathBuf,
    pub out: PathBuf,
}

/// Runtime facts reported in the artifact header.
#[derive(Debug, Clone)]
pub struct EnvironmentInfo {
    pub working_dir: PathBuf,
    pub generated_at: DateTime<Local>,
    pub runtime_version: String,
    pub runtime_root: String,
}

impl EnvironmentInfo {
    /// Captures the current time and toolchain identifiers for `working_dir`.
    pub fn capture(working_dir: PathBuf) -> Self {
        let runtime_root = std::env::var("GOROOT").unwrap_or_else(|_| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(|p| p.to_string_lossy().into_owned()))
                .unwrap_or_default()
        });

        Self {
            working_dir,
            generated_at: Local::now(),
            runtime_version: format!(
                "{} {} ({}/{})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
            runtime_root,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpSummary {
    pub out: PathBuf,
    pub files: usize,
}
