//! Scope-guarded temporary regions.
//!
//! A [`TempArena`] is scratch space carved from the free tail of a parent
//! [`Region`]. It bump-allocates independently of the parent and gives its
//! whole window back in O(1) when released. Release happens explicitly via
//! [`TempArena::release`] or implicitly on drop, and must follow LIFO order
//! with respect to every other allocation made on the parent.

use std::fmt;
use std::ops::Deref;

use tracing::warn;

use crate::error::ArenaError;
use crate::region::Region;

/// A nested, independently bump-allocated region of a parent.
///
/// Dereferences to [`Region`], so everything a root arena can do (allocate,
/// open further temporary regions) works here too.
///
/// ```
/// use strata_arena::Arena;
///
/// let arena = Arena::new(256).unwrap();
/// {
///     let scratch = arena.temp(64).unwrap();
///     let buf = scratch.alloc(32).unwrap();
///     buf.fill(7);
/// } // released here
/// assert_eq!(arena.pos(), 0);
/// ```
#[must_use]
pub struct TempArena<'a> {
    parent: &'a Region,
    region: Region,
    /// Offset of this region's window within the parent.
    start: usize,
}

impl<'a> TempArena<'a> {
    pub(crate) fn new(parent: &'a Region, region: Region, start: usize) -> Self {
        Self {
            parent,
            region,
            start,
        }
    }

    /// The region this one was carved from.
    pub fn parent(&self) -> &'a Region {
        self.parent
    }

    /// Offset of this region's window within its parent.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Give this region's window back to the parent.
    ///
    /// On success the parent's cursor moves back by exactly this region's
    /// capacity and the region is consumed: further allocations fail with
    /// [`ArenaError::MemoryFreed`].
    ///
    /// # Errors
    ///
    /// - [`ArenaError::ReleasedAfterSiblingAlloc`] if a later temporary
    ///   region is still open on the parent, or the parent allocated after
    ///   this region was opened. Neither region changes.
    /// - [`ArenaError::DoubleFree`] if the region was already released.
    pub fn release(&mut self) -> Result<(), ArenaError> {
        if self.region.is_consumed() {
            return Err(ArenaError::DoubleFree);
        }
        self.parent.release_child(self.region.id())?;
        self.region.mark_consumed();
        Ok(())
    }

    /// Temporary regions cannot be freed; use [`TempArena::release`].
    ///
    /// # Errors
    ///
    /// Always returns [`ArenaError::CannotFreeNonRootRegion`].
    pub fn free(&mut self) -> Result<(), ArenaError> {
        Err(ArenaError::CannotFreeNonRootRegion {
            depth: self.region.depth(),
        })
    }

    /// Rewind this region's own cursor to 0 and clear its sticky error.
    ///
    /// Does not touch the parent.
    pub fn reset(&mut self) {
        self.region.rewind();
    }
}

impl Deref for TempArena<'_> {
    type Target = Region;

    fn deref(&self) -> &Region {
        &self.region
    }
}

impl Drop for TempArena<'_> {
    fn drop(&mut self) {
        if self.region.is_consumed() {
            return;
        }
        if let Err(err) = self.release() {
            // Out of order: leave the bytes allocated in the parent so no
            // later allocation can overlap anything still in use.
            warn!(
                region = %self.region.id(),
                parent = %self.parent.id(),
                error = %err,
                "temporary region dropped out of order; window abandoned"
            );
            self.parent.abandon_child(self.region.id());
            self.region.mark_consumed();
        }
    }
}

impl fmt::Debug for TempArena<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TempArena")
            .field("parent", &self.parent.id())
            .field("start", &self.start)
            .field("region", &self.region)
            .finish()
    }
}
