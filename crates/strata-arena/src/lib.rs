//! Monotonic bump arenas with nested temporary regions.
//!
//! An [`Arena`] owns one contiguous block obtained from the system
//! allocator. Every allocation bumps a cursor forward; nothing is freed
//! individually. Scratch memory comes from a [`TempArena`], a nested region
//! carved off the parent's free tail that is itself bump-allocated and is
//! handed back to the parent in O(1) when released.
//!
//! # Architecture
//!
//! ```text
//! Arena (root, depth 0)
//! ├── RawBlock (owned system allocation)
//! └── Region ── pos, sticky error, stack of open temp frames
//!     └── TempArena (depth 1) ── Region over [start, start + len)
//!         └── TempArena (depth 2) ...
//! ```
//!
//! # Temporary region discipline
//!
//! Temporary regions must be released in exact reverse order of creation,
//! and only while the parent's cursor still sits at the region's end. Every
//! region carries a [`RegionId`](strata_core::RegionId); the parent checks
//! both the ID on top of its frame stack and the cursor position, so a
//! violation surfaces as [`ArenaError::ReleasedAfterSiblingAlloc`] instead
//! of corrupting the parent. Dropping a `TempArena` releases it.
//!
//! # Safety
//!
//! `unsafe` is confined to `raw.rs` and the single carve in
//! [`Region::alloc`]. Allocations borrow the region they came from, so the
//! borrow checker rules out use after release, reset or free.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod raw;
pub mod region;
pub mod temp;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use region::Region;
pub use temp::TempArena;
