//! Whole-file reads.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use strata_arena::Region;
use strata_core::ErrorKind;
use strata_str::Str;
use tracing::debug;

use crate::error::FsError;

/// The full contents of a file read in one go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    data: Vec<u8>,
}

impl File {
    /// The path the file was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the contents in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The raw contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The contents as a string view borrowing this file.
    pub fn as_str(&self) -> Str<'_> {
        Str::literal(&self.data)
    }

    /// Take ownership of the contents.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Read the whole file at `path`.
///
/// # Errors
///
/// [`FsError::NotFound`] if nothing exists at `path`, [`FsError::FileRead`]
/// for any other failure.
pub fn read_file(path: impl AsRef<Path>) -> Result<File, FsError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    debug!(path = %path.display(), size = data.len(), "file read");
    Ok(File {
        path: path.to_path_buf(),
        data,
    })
}

/// Read the whole file at `path` into a single allocation in `arena`.
///
/// Errors become the returned view's error: [`NotFound`] or [`FileRead`]
/// from the filesystem, or any arena error (typically [`OutOfMemory`]).
/// A path that is not a regular file is [`FileRead`] and leaves `arena`
/// untouched.
/// If the read fails after the allocation succeeded, the bytes stay
/// allocated in `arena`.
///
/// [`NotFound`]: strata_core::ErrorKind::NotFound
/// [`FileRead`]: strata_core::ErrorKind::FileRead
/// [`OutOfMemory`]: strata_core::ErrorKind::OutOfMemory
pub fn read_file_in<'a>(arena: &'a Region, path: impl AsRef<Path>) -> Str<'a> {
    let path = path.as_ref();
    match fill_from(arena, path) {
        Ok(bytes) => {
            debug!(path = %path.display(), size = bytes.len(), region = %arena.id(), "file read into arena");
            Str::literal(bytes)
        }
        Err(kind) => Str::errored(kind),
    }
}

fn fill_from<'a>(arena: &'a Region, path: &Path) -> Result<&'a [u8], ErrorKind> {
    let mut file = fs::File::open(path).map_err(|e| FsError::from_io(path, e).kind())?;
    let meta = file
        .metadata()
        .map_err(|e| FsError::from_io(path, e).kind())?;
    // Directories open fine on some platforms; never size an allocation
    // from one.
    if !meta.is_file() {
        return Err(ErrorKind::FileRead);
    }
    let len = usize::try_from(meta.len()).map_err(|_| ErrorKind::OutOfMemory)?;
    let dst = arena.alloc(len).map_err(|e| e.kind())?;
    file.read_exact(dst)
        .map_err(|e| FsError::from_io(path, e).kind())?;
    Ok(&*dst)
}
