use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Only a bare `~` or a `~/` prefix is expanded; paths like `~user/docs`
/// are left untouched.
pub fn expand_home(path: &str) -> String {
    if (path == "~" || path.starts_with("~/"))
        && let Some(home) = dirs::home_dir()
    {
        return path.replacen('~', &home.to_string_lossy(), 1);
    }
    path.to_string()
}

/// Normalize a path by collapsing `.` and `..` components without touching
/// the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .fold(PathBuf::new(), |mut result, component| {
            match component {
                std::path::Component::ParentDir => {
                    result.pop();
                }
                std::path::Component::CurDir => {}
                _ => {
                    result.push(component);
                }
            }
            result
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            let home_str = home.to_string_lossy();

            assert_eq!(expand_home("~"), home_str);
            assert_eq!(expand_home("~/documents"), format!("{}/documents", home_str));
            assert_eq!(
                expand_home("~/knowledge/base"),
                format!("{}/knowledge/base", home_str)
            );
        }

        // Paths without a leading ~/ stay untouched
        assert_eq!(expand_home("/absolute/path"), "/absolute/path");
        assert_eq!(expand_home("relative/path"), "relative/path");
        assert_eq!(expand_home("./current/path"), "./current/path");
        assert_eq!(expand_home(""), "");
        assert_eq!(expand_home("/path/with/~tilde/inside"), "/path/with/~tilde/inside");

        // ~user forms are not expanded
        assert_eq!(expand_home("~someone/docs"), "~someone/docs");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("simple/path")),
            PathBuf::from("simple/path")
        );
        assert_eq!(
            normalize_path(Path::new("./current/./directory/.")),
            PathBuf::from("current/directory")
        );
        assert_eq!(
            normalize_path(Path::new("parent/../child")),
            PathBuf::from("child")
        );

        #[cfg(unix)]
        assert_eq!(
            normalize_path(Path::new("/kb/./docs/../resume.md")),
            PathBuf::from("/kb/resume.md")
        );
    }

    #[test]
    fn test_normalize_path_edge_cases() {
        assert_eq!(normalize_path(Path::new("")), PathBuf::new());
        assert_eq!(normalize_path(Path::new(".")), PathBuf::new());
        assert_eq!(normalize_path(Path::new("..")), PathBuf::new());
        assert_eq!(normalize_path(Path::new("a/b/../..")), PathBuf::new());
    }
}
