use std::path::Path;

use crate::error::{BadgeError, Result};

/// Create `dir` and any missing parents. An empty path means the current
/// directory and is left alone.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| BadgeError::FileSystem {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_badge(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| BadgeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_directory_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("badges");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directories are fine.
        ensure_directory(&nested).unwrap();
    }

    #[test]
    fn test_ensure_directory_empty_path() {
        ensure_directory(Path::new("")).unwrap();
    }

    #[test]
    fn test_ensure_directory_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, "x").unwrap();
        let err = ensure_directory(&file.join("sub")).unwrap_err();
        assert!(matches!(err, BadgeError::FileSystem { .. }));
    }

    #[test]
    fn test_write_badge_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coverage.svg");
        write_badge(&path, "first version, longer").unwrap();
        write_badge(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_badge_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("coverage.svg");
        let err = write_badge(&path, "<svg/>").unwrap_err();
        assert!(matches!(err, BadgeError::FileAccess { .. }));
    }
}
