use std::path::{Path, PathBuf};
use tokio::fs;

use crate::errors::{MeServerError, MeServerResult};
use crate::utils::path::expand_home;

/// Resolve the configured documents directory to its canonical form.
///
/// Expands a leading `~`, resolves the path against the current working
/// directory, collapses relative components and symlinks, and verifies the
/// result exists and is a directory. This runs exactly once at startup; the
/// returned path is the immutable root for every subsequent operation.
pub async fn resolve_root(path: &str) -> MeServerResult<PathBuf> {
    let expanded = expand_home(path);
    let requested = Path::new(&expanded);

    let canonical = requested.canonicalize().map_err(|_| {
        if requested.exists() {
            MeServerError::RootInaccessible {
                path: expanded.clone(),
            }
        } else {
            MeServerError::RootNotFound {
                path: expanded.clone(),
            }
        }
    })?;

    let metadata =
        fs::metadata(&canonical)
            .await
            .map_err(|_| MeServerError::RootInaccessible {
                path: canonical.display().to_string(),
            })?;

    if !metadata.is_dir() {
        return Err(MeServerError::NotADirectory {
            path: canonical.display().to_string(),
        });
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_resolve_root_with_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = resolve_root(&temp_dir.path().display().to_string()).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), temp_dir.path().canonicalize().unwrap());
    }

    #[tokio::test]
    async fn test_resolve_root_relative_path_becomes_absolute() {
        let result = resolve_root(".").await;
        assert!(result.is_ok());
        let resolved = result.unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(
            resolved,
            std::env::current_dir().unwrap().canonicalize().unwrap()
        );
    }

    #[tokio::test]
    async fn test_resolve_root_missing_path() {
        let result = resolve_root("/this/path/does/not/exist").await;
        assert!(matches!(
            result.unwrap_err(),
            MeServerError::RootNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_root_rejects_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not_a_dir.md");
        tokio::fs::write(&file_path, "content").await.unwrap();

        let result = resolve_root(&file_path.display().to_string()).await;
        assert!(matches!(
            result.unwrap_err(),
            MeServerError::NotADirectory { .. }
        ));
    }
}
