use crate::app::error::{DumpError, DumpResult};
use crate::app::filter::FileFilter;
use crate::app::models::{Config, Item};
use crate::app::paths::to_slash;
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    target: PathBuf,
    working_dir: PathBuf,
    filter: FileFilter,
}

impl Scanner {
    pub fn new(target: PathBuf, working_dir: PathBuf, config: &Config) -> Self {
        Self {
            target,
            working_dir,
            filter: FileFilter::new(config),
        }
    }

    /// Walks the target depth-first and returns the selected files sorted by relative path.
    /// The first filesystem error aborts the scan.
    pub fn scan(&self) -> DumpResult<Vec<Item>> {
        let mut items = Vec::new();

        // filter_entry is never consulted for the walk root, so prune it here.
        if self.target.is_dir() && self.filter.should_prune_directory(&to_slash(&self.target)) {
            log::debug!("Pruned scan root {}", self.target.display());
            return Ok(items);
        }

        // Only our own rules select files: no gitignore, hidden or parent-ignore handling.
        let filter = self.filter.clone();
        let walker = WalkBuilder::new(&self.target)
            .standard_filters(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if is_dir && filter.should_prune_directory(&to_slash(entry.path())) {
                    log::debug!("Pruned directory {}", entry.path().display());
                    return false;
                }
                true
            })
            .build();

        for result in walker {
            let entry = result.map_err(|source| DumpError::Traversal {
                path: self.target.clone(),
                source,
            })?;

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }

            if let Some(item) = self.process_entry(entry.path())? {
                items.push(item);
            }
        }

        items.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(items)
    }

    fn process_entry(&self, path: &Path) -> DumpResult<Option<Item>> {
        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if !self.filter.should_collect_file(&to_slash(path), &basename) {
            log::trace!("Skipped {}", path.display());
            return Ok(None);
        }

        let read_err = |source| DumpError::Read {
            path: path.to_path_buf(),
            source,
        };
        let size_bytes = fs::metadata(path).map_err(read_err)?.len();
        let data = fs::read(path).map_err(read_err)?;

        let relative = diff_paths(path, &self.working_dir).unwrap_or_else(|| path.to_path_buf());

        Ok(Some(Item {
            relative_path: to_slash(&relative),
            absolute_path: path.to_path_buf(),
            content_hash: sha256_hex(&data),
            size_bytes,
        }))
    }
}

/// Hex-encoded SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_of_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
