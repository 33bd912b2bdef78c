//! Identity tags for arena regions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`RegionId`] allocation.
static REGION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an arena region.
///
/// Allocated from a monotonic atomic counter via [`RegionId::next`]. Two
/// regions always have different IDs, even when they were carved from the
/// same parent offset with the same length. Release checks compare IDs so
/// a region can never be mistaken for a same-sized sibling that happens to
/// occupy the same addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    /// Allocate a fresh, unique region ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process.
    pub fn next() -> Self {
        Self(REGION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
