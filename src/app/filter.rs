use crate::app::models::Config;
use std::path::Path;

/// Pure selection rules for one run, built once from the [`Config`].
#[derive(Debug, Clone)]
pub struct FileFilter {
    ext: String,
    out_basename: String,
    include: String,
    excludes: Vec<String>,
}

impl FileFilter {
    pub fn new(config: &Config) -> Self {
        let out_basename = Path::new(&config.out)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            ext: config.ext.clone(),
            out_basename,
            include: config.include.clone(),
            excludes: split_clean(&config.exclude),
        }
    }

    pub fn should_prune_directory(&self, dir_path: &str) -> bool {
        should_prune_directory(dir_path, &self.excludes)
    }

    pub fn should_collect_file(&self, file_path: &str, basename: &str) -> bool {
        should_collect_file(
            file_path,
            basename,
            &self.ext,
            &self.out_basename,
            &self.include,
            &self.excludes,
        )
    }
}

/// True when any exclude entry occurs in the `/`-separated directory path.
pub fn should_prune_directory(dir_path: &str, excludes: &[String]) -> bool {
    matches_any(dir_path, excludes)
}

/// Suffix, self-exclusion, include and exclude rules, all of which must pass.
pub fn should_collect_file(
    file_path: &str,
    basename: &str,
    ext: &str,
    out_basename: &str,
    include: &str,
    excludes: &[String],
) -> bool {
    if !basename.ends_with(ext) {
        return false;
    }
    // Compared by name only, so same-named files in other directories are skipped too.
    if basename == out_basename {
        return false;
    }
    if !include.is_empty() && !file_path.contains(include) {
        return false;
    }
    !matches_any(file_path, excludes)
}

/// Splits a comma-separated list, trimming entries, normalizing `\` to `/` and dropping empties.
pub fn split_clean(list: &str) -> Vec<String> {
    list.split(',')
        .map(|part| part.trim().replace('\\', "/"))
        .filter(|part| !part.is_empty())
        .collect()
}

fn matches_any(path: &str, excludes: &[String]) -> bool {
    excludes
        .iter()
        .any(|bad| !bad.is_empty() && path.contains(bad.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excludes(list: &str) -> Vec<String> {
        split_clean(list)
    }

    #[test]
    fn split_clean_trims_and_drops_empty_entries() {
        assert_eq!(
            split_clean(" _test.go , ,/vendor/,, \\gen\\ "),
            vec!["_test.go", "/vendor/", "/gen/"]
        );
        assert!(split_clean("").is_empty());
        assert!(split_clean(" , ").is_empty());
    }

    #[test]
    fn prune_matches_substring_anywhere_in_path() {
        let ex = excludes("/vendor/,/.git");
        assert!(should_prune_directory("/repo/vendor/lib", &ex));
        // The directory itself has no trailing slash; its files are caught by the file rule.
        assert!(!should_prune_directory("/repo/vendor", &ex));
        assert!(should_prune_directory("/repo/.git", &ex));
        assert!(should_prune_directory("/repo/.github", &ex));
        assert!(!should_prune_directory("/repo/src", &ex));
    }

    #[test]
    fn no_excludes_never_prunes() {
        assert!(!should_prune_directory("/anything/at/all", &[]));
    }

    #[test]
    fn extension_is_an_exact_case_sensitive_suffix() {
        let ex = Vec::new();
        assert!(should_collect_file("/p/a.go", "a.go", ".go", "out.txt", "", &ex));
        assert!(!should_collect_file("/p/a.GO", "a.GO", ".go", "out.txt", "", &ex));
        assert!(!should_collect_file("/p/a.gox", "a.gox", ".go", "out.txt", "", &ex));
    }

    #[test]
    fn basename_matching_output_is_skipped_everywhere() {
        let ex = Vec::new();
        assert!(!should_collect_file("/p/dump.txt", "dump.txt", ".txt", "dump.txt", "", &ex));
        assert!(!should_collect_file("/p/sub/dump.txt", "dump.txt", ".txt", "dump.txt", "", &ex));
        assert!(should_collect_file("/p/sub/other.txt", "other.txt", ".txt", "dump.txt", "", &ex));
    }

    #[test]
    fn include_filters_on_path_only() {
        let ex = Vec::new();
        assert!(should_collect_file("/p/a_DTO.go", "a_DTO.go", ".go", "o", "DTO", &ex));
        assert!(should_collect_file("/p/DTO/x.go", "x.go", ".go", "o", "DTO", &ex));
        assert!(!should_collect_file("/p/b.go", "b.go", ".go", "o", "DTO", &ex));
    }

    #[test]
    fn exclude_entry_in_file_path_skips_file() {
        let ex = excludes("_test.go");
        assert!(!should_collect_file("/p/a_test.go", "a_test.go", ".go", "o", "", &ex));
        assert!(should_collect_file("/p/a.go", "a.go", ".go", "o", "", &ex));
    }

    #[test]
    fn filter_uses_basename_of_configured_output() {
        let config = Config {
            out: "dumps/models_tree.txt".to_string(),
            ext: ".txt".to_string(),
            exclude: String::new(),
            ..Config::default()
        };
        let filter = FileFilter::new(&config);
        assert!(!filter.should_collect_file("/p/models_tree.txt", "models_tree.txt"));
        assert!(filter.should_collect_file("/p/notes.txt", "notes.txt"));
    }
}
