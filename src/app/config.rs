use crate::app::cli::Cli;
use crate::app::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RC_NAME: &str = ".codedumprc";

const DEFAULT_RC: &str = "# .codedumprc
# Root of the project (where the final TXT will be saved)
root=.

# Target folder to scan
target=./models

# Output file name (relative to root)
out=models_tree.txt

# File extension to include
ext=.go

# Substrings to exclude (comma separated)
exclude=_test.go,/.git/,/vendor/

# Required substring (optional)
include=

# Keep \"package\" line (true/false)
pkg=false
";

/// Writes a commented rc file holding the default values.
pub fn write_default_rc(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_RC).with_context(|| format!("Failed to write {}", path.display()))
}

/// Applies every recognised `key=value` line of `content` onto `config`.
/// Blank lines, `#` comments, lines without `=` and unknown keys are ignored.
pub fn apply_rc(content: &str, config: &mut Config) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();

        match key.trim().to_ascii_lowercase().as_str() {
            "root" => config.root = value,
            "target" => config.target = value,
            "out" => config.out = value,
            "ext" => config.ext = value,
            "exclude" => config.exclude = value,
            "include" => config.include = value,
            "pkg" => config.keep_declaration_line = parse_bool(&value),
            other => log::debug!("Ignoring unknown rc key {:?}", other),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes")
}

pub fn read_rc(path: &Path, config: &mut Config) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("error reading RC {}", path.display()))?;
    apply_rc(&content, config);
    Ok(())
}

/// Looks for an rc file in `start` and each of its ancestors, then in `home`.
pub fn find_rc(start: &Path, home: Option<&Path>) -> Option<PathBuf> {
    start
        .ancestors()
        .chain(home)
        .map(|dir| dir.join(DEFAULT_RC_NAME))
        .find(|candidate| candidate.is_file())
}

fn override_with(slot: &mut String, value: Option<String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        *slot = v;
    }
}

/// Defaults, then the rc file (explicit `--rc` or discovered from `cwd`), then CLI flags.
pub fn resolve_config(cli: Cli, cwd: &Path) -> Result<Config> {
    let mut config = Config::default();

    let rc_path = cli
        .rc
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| find_rc(cwd, dirs::home_dir().as_deref()));

    if let Some(path) = rc_path {
        log::info!("Loading config from {}", path.display());
        read_rc(&path, &mut config)?;
    }

    override_with(&mut config.root, cli.root);
    override_with(&mut config.target, cli.target);
    override_with(&mut config.out, cli.out);
    override_with(&mut config.ext, cli.ext);
    override_with(&mut config.include, cli.include);
    override_with(&mut config.exclude, cli.exclude);
    if cli.pkg {
        config.keep_declaration_line = true;
    }

    Ok(config)
}
