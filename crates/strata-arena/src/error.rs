//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use strata_core::{ErrorKind, RegionId};

/// Errors that can occur during arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system allocator refused the root block, or a bump allocation
    /// would run past the end of the region. Sticky: once a region records
    /// it, every later allocation from that region fails with it too.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free in the region at the time of the request.
        remaining: usize,
    },
    /// The region was already freed (root) or released (temporary).
    MemoryFreed,
    /// `free` on an already-freed root, or `release` on an already-released
    /// temporary region.
    DoubleFree,
    /// A temporary region was released while it was not the most recent
    /// outstanding allocation of its parent.
    ReleasedAfterSiblingAlloc {
        /// The region whose release was refused.
        region: RegionId,
        /// Parent offset at which the region ends.
        expected_end: usize,
        /// Parent cursor at the time of the attempt.
        parent_pos: usize,
    },
    /// `free` was called on a temporary region.
    CannotFreeNonRootRegion {
        /// Nesting depth of the offending region.
        depth: u32,
    },
    /// No region was supplied.
    NullArena,
}

impl ArenaError {
    /// The closed error kind this error maps onto.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::MemoryFreed => ErrorKind::MemoryFreed,
            Self::DoubleFree => ErrorKind::DoubleFree,
            Self::ReleasedAfterSiblingAlloc { .. } => ErrorKind::ReleasedAfterSiblingAlloc,
            Self::CannotFreeNonRootRegion { .. } => ErrorKind::CannotFreeNonRootRegion,
            Self::NullArena => ErrorKind::NullArgument,
        }
    }
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::MemoryFreed => write!(f, "region memory already freed"),
            Self::DoubleFree => write!(f, "region freed more than once"),
            Self::ReleasedAfterSiblingAlloc {
                region,
                expected_end,
                parent_pos,
            } => {
                write!(
                    f,
                    "temporary region {region} released out of order: ends at {expected_end}, parent cursor at {parent_pos}"
                )
            }
            Self::CannotFreeNonRootRegion { depth } => {
                write!(f, "cannot free a temporary region (depth {depth}); release it instead")
            }
            Self::NullArena => write!(f, "no arena supplied"),
        }
    }
}

impl Error for ArenaError {}

impl From<ArenaError> for ErrorKind {
    fn from(err: ArenaError) -> Self {
        err.kind()
    }
}
