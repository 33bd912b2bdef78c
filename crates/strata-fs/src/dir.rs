//! Lazy directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::FsError;

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// File name, lossily decoded as UTF-8.
    pub name: String,
    /// Size in bytes as reported by the filesystem.
    pub size: u64,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry's permissions forbid writing.
    pub read_only: bool,
}

/// Forward-only iterator over a directory's entries.
///
/// Yields `Ok(DirEntry)` per entry in filesystem order, `Err` for an entry
/// whose metadata cannot be read, and `None` once the listing is finished.
/// `.` and `..` are never yielded.
#[derive(Debug)]
pub struct DirIter {
    path: PathBuf,
    inner: fs::ReadDir,
}

impl DirIter {
    /// The directory being listed.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for DirIter {
    type Item = Result<DirEntry, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.inner.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(FsError::from_io(&self.path, e))),
        };
        let path = entry.path();
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(e) => return Some(Err(FsError::from_io(&path, e))),
        };
        Some(Ok(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: meta.len(),
            is_dir: meta.is_dir(),
            read_only: meta.permissions().readonly(),
        }))
    }
}

/// Start listing the directory at `path`.
///
/// # Errors
///
/// [`FsError::NotFound`] if nothing exists at `path`, [`FsError::FileRead`]
/// if it cannot be opened as a directory.
pub fn read_dir(path: impl AsRef<Path>) -> Result<DirIter, FsError> {
    let path = path.as_ref();
    let inner = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
    debug!(path = %path.display(), "directory listing opened");
    Ok(DirIter {
        path: path.to_path_buf(),
        inner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ErrorKind;

    #[test]
    fn lists_files_and_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"12345").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries: Vec<_> = read_dir(dir.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a.txt");
        assert_eq!(entries[0].size, 5);
        assert!(!entries[0].is_dir);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);
    }

    #[test]
    fn empty_directory_ends_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut iter = read_dir(dir.path()).unwrap();
        assert_eq!(iter.path(), dir.path());
        assert!(iter.next().is_none());
    }

    #[test]
    fn read_only_flag_follows_permissions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frozen");
        fs::write(&path, b"x").unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let entry = read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        assert!(entry.read_only);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dir(dir.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn listing_a_file_is_file_read() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = read_dir(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileRead);
    }
}
