//! Filesystem collaborators for strata.
//!
//! Two read-only entry points:
//!
//! - [`read_file`] / [`read_file_in`]: load a whole file, either into an
//!   owned [`File`] or straight into an arena as a [`Str`](strata_str::Str).
//! - [`read_dir`]: a lazy, forward-only listing of a directory.
//!
//! Failures are reported as [`FsError`], which maps onto the shared
//! [`ErrorKind`](strata_core::ErrorKind) table.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dir;
pub mod error;
pub mod file;

pub use dir::{read_dir, DirEntry, DirIter};
pub use error::FsError;
pub use file::{read_file, read_file_in, File};
