//! Strata: bump arenas with nested temporary regions, capacity-bounded
//! lists, and error-carrying byte strings.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all strata sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let arena = Arena::new(1024).unwrap();
//! let line = Str::alloc(&arena, b"alpha,beta,gamma");
//!
//! let mut words: FixedList<Str<'_>> = FixedList::with_capacity(2).unwrap();
//! let mut overflow = None;
//! for word in line.iter().splits(b',') {
//!     if let Err(err) = words.push(word) {
//!         overflow = Some(err.kind());
//!     }
//! }
//! assert_eq!(words.len(), 2);
//! assert_eq!(overflow, Some(ErrorKind::ListFull));
//!
//! // Scratch work lives in a temporary region and vanishes with it.
//! {
//!     let scratch = arena.temp(64).unwrap();
//!     let loud = Str::upper(&scratch, words[0]);
//!     assert_eq!(loud, "ALPHA");
//! }
//! assert_eq!(arena.pos(), 16);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | `ErrorKind`, `RegionId`, the fatal reporter |
//! | [`arena`] | `strata-arena` | Root arenas, regions, temporary regions |
//! | [`list`] | `strata-list` | `FixedList` |
//! | [`string`] | `strata-str` | `Str` and its splitter |
//! | [`fs`] | `strata-fs` | Whole-file reads and directory listing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared error kinds, region ids, and the fatal reporter (`strata-core`).
pub use strata_core as types;

/// Bump arenas and temporary regions (`strata-arena`).
///
/// Start from [`arena::Arena`]; open scratch space with
/// [`arena::Region::temp`].
pub use strata_arena as arena;

/// Fixed-capacity lists (`strata-list`).
pub use strata_list as list;

/// Error-carrying byte views (`strata-str`).
pub use strata_str as string;

/// Filesystem reads (`strata-fs`).
pub use strata_fs as fs;

/// Common imports for typical strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use strata_core::{fatal, ErrorKind};

    // Arena
    pub use strata_arena::{Arena, ArenaConfig, ArenaError, Region, TempArena};

    // List
    pub use strata_list::{FixedList, ListError};

    // Strings
    pub use strata_str::{Str, StrIter};

    // Filesystem
    pub use strata_fs::{read_dir, read_file, read_file_in, FsError};
}
