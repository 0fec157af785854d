// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod paths;
pub mod scanner;
pub mod transform;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::Path;

use self::cli::Cli;
use self::config::{resolve_config, write_default_rc, DEFAULT_RC_NAME};
use self::error::{DumpError, DumpResult};
use self::formatter::OutputGenerator;
use self::models::{Config, DumpSummary, EnvironmentInfo, Item, ResolvedPaths};
use self::scanner::Scanner;
use self::transform::transform;

/// Parses flags, resolves the configuration and runs one dump.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let current_dir = env::current_dir().context("Failed to get current directory")?;

    if args.init {
        write_default_rc(&current_dir.join(DEFAULT_RC_NAME))?;
        println!(
            "Created {} with defaults. Adjust root/target/out according to your project.",
            DEFAULT_RC_NAME
        );
        return Ok(());
    }

    let config = resolve_config(args, &current_dir)?;
    let summary = dump(&config)?;

    println!(
        "✅ codeDump complete! Generated {:?} with {} files.",
        summary.out.display().to_string(),
        summary.files
    );
    Ok(())
}

/// Runs a dump relative to the process working directory.
pub fn dump(config: &Config) -> DumpResult<DumpSummary> {
    let working_dir = env::current_dir().map_err(DumpError::Resolution)?;
    dump_in(config, EnvironmentInfo::capture(working_dir))
}

/// Turns the configured paths into absolute ones against `working_dir`.
pub fn resolve_paths(config: &Config, working_dir: &Path) -> ResolvedPaths {
    let root = paths::resolve(working_dir, &config.root);
    let target = paths::resolve(working_dir, &config.target);
    let out = paths::resolve(&root, &config.out);
    ResolvedPaths { root, target, out }
}

/// Collects the files under `target` that `config` selects, sorted by relative path.
pub fn collect(target: &Path, config: &Config, working_dir: &Path) -> DumpResult<Vec<Item>> {
    Scanner::new(target.to_path_buf(), working_dir.to_path_buf(), config).scan()
}

/// Scans, renders and writes the artifact. Any error leaves the destination untouched.
pub fn dump_in(config: &Config, env: EnvironmentInfo) -> DumpResult<DumpSummary> {
    let paths = resolve_paths(config, &env.working_dir);
    log::debug!(
        "Resolved root={} target={} out={}",
        paths.root.display(),
        paths.target.display(),
        paths.out.display()
    );

    let items = collect(&paths.target, config, &env.working_dir)?;
    if items.is_empty() {
        log::warn!("⚠️ No files matched under {}", paths.target.display());
    }

    let mut output = OutputGenerator::new(&paths, &env);
    for item in &items {
        let data = fs::read(&item.absolute_path).map_err(|source| DumpError::Read {
            path: item.absolute_path.clone(),
            source,
        })?;
        output.push_file(item, &transform(&data, config.keep_declaration_line));
    }

    output.write(&paths.out)?;
    log::info!("Wrote {} files to {}", items.len(), paths.out.display());

    Ok(DumpSummary {
        out: paths.out,
        files: items.len(),
    })
}
