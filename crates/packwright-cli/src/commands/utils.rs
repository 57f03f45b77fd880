//! Shared helpers for command implementations.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};

/// Resolve `path` against `cwd` unless it is already absolute.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Current working directory.
///
/// # Errors
///
/// Returns an I/O error if the directory is gone or unreadable.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_absolute() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("/other/app"), cwd),
            PathBuf::from("/other/app")
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_path(Path::new("app/packwright.json"), cwd),
            PathBuf::from("/work/app/packwright.json")
        );
    }

    #[test]
    fn test_get_cwd_is_absolute() {
        assert!(get_cwd().unwrap().is_absolute());
    }
}
