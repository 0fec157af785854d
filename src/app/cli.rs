use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate a source tree into one annotated text dump"
)]
pub struct Cli {
    /// Create a .codedumprc with defaults in the current directory
    #[arg(long)]
    pub init: bool,

    /// Path to RC file. If omitted, searched from the current directory upward, then $HOME
    #[arg(long)]
    pub rc: Option<PathBuf>,

    /// Root dir where the output is saved (overrides RC)
    #[arg(long)]
    pub root: Option<String>,

    /// Target dir to scan (overrides RC)
    #[arg(long)]
    pub target: Option<String>,

    /// Output file name, relative to root (overrides RC)
    #[arg(long)]
    pub out: Option<String>,

    /// Target file extension (overrides RC)
    #[arg(long)]
    pub ext: Option<String>,

    /// Required substring in path (overrides RC)
    #[arg(long)]
    pub include: Option<String>,

    /// Comma-separated substrings to skip (overrides RC)
    #[arg(long)]
    pub exclude: Option<String>,

    /// Preserve the package line (overrides RC to true)
    #[arg(long)]
    pub pkg: bool,
}
