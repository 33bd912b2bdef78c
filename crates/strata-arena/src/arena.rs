//! Root arenas backed by one system allocation.

use std::ops::Deref;

use strata_core::RegionId;
use tracing::debug;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw::RawBlock;
use crate::region::Region;

/// A root arena: depth 0, owns its memory block.
///
/// Dereferences to [`Region`] for allocation and temporary regions.
/// The block goes back to the system on [`Arena::free`] or on drop,
/// whichever comes first.
///
/// ```
/// use strata_arena::Arena;
///
/// let arena = Arena::new(64).unwrap();
/// let a = arena.alloc(16).unwrap();
/// let b = arena.alloc(16).unwrap();
/// a[0] = 1;
/// b[0] = 2;
/// assert_eq!(arena.pos(), 32);
/// ```
#[derive(Debug)]
pub struct Arena {
    region: Region,
    /// `None` once freed.
    block: Option<RawBlock>,
}

impl Arena {
    /// Allocate a root arena of `size` bytes with default settings.
    ///
    /// # Errors
    ///
    /// [`ArenaError::OutOfMemory`] if the system allocator refuses.
    pub fn new(size: usize) -> Result<Self, ArenaError> {
        Self::with_config(&ArenaConfig::new(size))
    }

    /// Allocate a root arena as described by `config`.
    ///
    /// # Errors
    ///
    /// [`ArenaError::OutOfMemory`] if the system allocator refuses.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let block = RawBlock::allocate(config.size).ok_or(ArenaError::OutOfMemory {
            requested: config.size,
            remaining: 0,
        })?;
        let id = RegionId::next();
        let region = Region::new(id, block.span(), 0, config.zero_on_alloc);
        debug!(region = %id, size = config.size, "arena created");
        Ok(Self {
            region,
            block: Some(block),
        })
    }

    /// Return the block to the system allocator.
    ///
    /// Afterwards every allocation fails with [`ArenaError::MemoryFreed`].
    /// Temporary regions borrow the arena, so none can be open here.
    ///
    /// # Errors
    ///
    /// [`ArenaError::DoubleFree`] if the arena was already freed.
    pub fn free(&mut self) -> Result<(), ArenaError> {
        let Some(block) = self.block.take() else {
            return Err(ArenaError::DoubleFree);
        };
        self.region.mark_consumed();
        drop(block);
        debug!(region = %self.region.id(), "arena freed");
        Ok(())
    }

    /// Whether [`Arena::free`] has been called.
    pub fn is_freed(&self) -> bool {
        self.block.is_none()
    }

    /// Rewind the cursor to 0 and clear any sticky error.
    ///
    /// Every previous allocation is invalidated; the borrow checker
    /// guarantees none is still in use. No effect on a freed arena.
    pub fn reset(&mut self) {
        self.region.rewind();
        debug!(region = %self.region.id(), "arena reset");
    }
}

impl Deref for Arena {
    type Target = Region;

    fn deref(&self) -> &Region {
        &self.region
    }
}
