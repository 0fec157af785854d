use std::path::{Component, Path, PathBuf};

/// Resolves `path` against `base`. Absolute inputs are returned untouched; relative ones
/// are joined onto `base` and lexically normalized.
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }
    normalize(&base.join(candidate))
}

/// Collapses `.` and `..` without touching the filesystem. `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | None => out.push(".."),
                Some(_) => {
                    out.pop();
                }
            },
            c => out.push(c),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Renders a path with `/` separators on every platform.
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_is_returned_unchanged() {
        let base = Path::new("/work");
        assert_eq!(resolve(base, "/etc/./x"), PathBuf::from("/etc/./x"));
    }

    #[test]
    fn relative_path_is_joined_and_cleaned() {
        let base = Path::new("/work/project");
        assert_eq!(resolve(base, "./models"), PathBuf::from("/work/project/models"));
        assert_eq!(resolve(base, "../other/./src"), PathBuf::from("/work/other/src"));
        assert_eq!(resolve(base, "."), PathBuf::from("/work/project"));
    }

    #[test]
    fn parent_dir_does_not_escape_root() {
        assert_eq!(resolve(Path::new("/a"), "../../../b"), PathBuf::from("/b"));
    }

    #[test]
    fn relative_normalize_keeps_leading_parents() {
        assert_eq!(normalize(Path::new("../x/../../y")), PathBuf::from("../../y"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn to_slash_on_unix_paths_is_identity() {
        assert_eq!(to_slash(Path::new("/a/b/c.go")), "/a/b/c.go");
    }
}
