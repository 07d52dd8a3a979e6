//! System capability traits for dependency injection.

use std::io::ErrorKind;
use std::path::PathBuf;

/// Outcome of a filesystem existence query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Existence {
    Exists,
    Missing,
    /// The query itself could not be answered.
    Failed(String),
}

impl Existence {
    #[inline]
    pub fn exists(&self) -> bool {
        matches!(self, Existence::Exists)
    }
}

pub trait FileSystem {
    /// Checks `path` exactly as given; the whole slice is the path.
    fn exists(&self, path: &[u8]) -> Existence;
}

pub struct StdFileSystem;

#[cfg(unix)]
fn bytes_to_path(path: &[u8]) -> Result<PathBuf, String> {
    use std::os::unix::ffi::OsStrExt;
    Ok(PathBuf::from(std::ffi::OsStr::from_bytes(path)))
}

#[cfg(not(unix))]
fn bytes_to_path(path: &[u8]) -> Result<PathBuf, String> {
    std::str::from_utf8(path)
        .map(PathBuf::from)
        .map_err(|e| e.to_string())
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &[u8]) -> Existence {
        if path.is_empty() {
            return Existence::Missing;
        }
        if path.contains(&0) {
            return Existence::Failed("path contains a NUL byte".into());
        }
        let p = match bytes_to_path(path) {
            Ok(p) => p,
            Err(e) => return Existence::Failed(e),
        };
        match std::fs::metadata(&p) {
            Ok(_) => Existence::Exists,
            Err(e) if e.kind() == ErrorKind::NotFound => Existence::Missing,
            Err(e) => Existence::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_existing_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.txt");
        std::fs::write(&file, b"x").unwrap();
        let fs = StdFileSystem;
        assert_eq!(
            fs.exists(file.to_string_lossy().as_bytes()),
            Existence::Exists
        );
        let missing = dir.path().join("absent.txt");
        assert_eq!(
            fs.exists(missing.to_string_lossy().as_bytes()),
            Existence::Missing
        );
    }

    #[test]
    fn interior_nul_is_a_failed_query() {
        let fs = StdFileSystem;
        assert!(matches!(fs.exists(b"/tmp\0/x"), Existence::Failed(_)));
    }

    #[test]
    fn empty_path_is_missing() {
        assert_eq!(StdFileSystem.exists(b""), Existence::Missing);
    }
}
