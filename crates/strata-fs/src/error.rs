//! Filesystem error types.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use strata_core::ErrorKind;

/// Errors from reading files or listing directories.
#[derive(Debug)]
pub enum FsError {
    /// The path does not exist.
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// Any other I/O failure while opening or reading.
    FileRead {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while accessing `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            _ => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// The closed error kind this error maps onto.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::FileRead { .. } => ErrorKind::FileRead,
        }
    }

    /// The path involved in the failure.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::FileRead { path, .. } => path,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "not found: {}", path.display()),
            Self::FileRead { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileRead { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<FsError> for ErrorKind {
    fn from(err: FsError) -> Self {
        err.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn missing_path_is_not_found() {
        let err = FsError::from_io(
            Path::new("/nope"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), Path::new("/nope"));
        assert!(err.source().is_none());
    }

    #[test]
    fn other_failures_are_file_read() {
        let err = FsError::from_io(
            Path::new("locked.txt"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind(), ErrorKind::FileRead);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to read locked.txt"));
    }
}
