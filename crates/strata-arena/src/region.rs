//! The bump-allocating core shared by root and temporary arenas.
//!
//! A [`Region`] is a cursor over a fixed window of bytes. It never owns the
//! bytes: a root [`Arena`](crate::Arena) owns the system block, a
//! [`TempArena`](crate::TempArena) borrows its window from a parent region.
//! All bookkeeping lives in `Cell`/`RefCell`, so allocation only needs
//! `&self` and several allocations can be alive at once.

use std::cell::{Cell, RefCell};

use smallvec::SmallVec;
use strata_core::RegionId;
use tracing::{debug, trace};

use crate::error::ArenaError;
use crate::raw::RawSpan;
use crate::temp::TempArena;

/// Lifecycle of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RegionState {
    /// Accepting allocations.
    Live,
    /// An allocation failed; the error sticks until the region is reset.
    Failed(ArenaError),
    /// Freed (root) or released (temporary).
    Consumed,
}

/// An outstanding temporary region carved from this region.
#[derive(Clone, Copy, Debug)]
struct TempFrame {
    id: RegionId,
    start: usize,
    len: usize,
}

/// A monotonic bump allocator over a fixed byte window.
///
/// Invariant: `0 <= pos <= capacity` at all times. `pos` only moves forward
/// on allocation, and only moves back when the most recently opened
/// temporary region is released or the region is reset.
///
/// `Region` is neither `Send` nor `Sync`; all state is unsynchronised and
/// belongs to one logical owner.
#[derive(Debug)]
pub struct Region {
    id: RegionId,
    span: RawSpan,
    depth: u32,
    zero_on_alloc: bool,
    /// Bump pointer: next free byte offset.
    pos: Cell<usize>,
    state: Cell<RegionState>,
    /// Open temporary regions, oldest first.
    open: RefCell<SmallVec<[TempFrame; 4]>>,
}

impl Region {
    pub(crate) fn new(id: RegionId, span: RawSpan, depth: u32, zero_on_alloc: bool) -> Self {
        Self {
            id,
            span,
            depth,
            zero_on_alloc,
            pos: Cell::new(0),
            state: Cell::new(RegionState::Live),
            open: RefCell::new(SmallVec::new()),
        }
    }

    /// Identity tag of this region.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Nesting depth: 0 for a root arena, `parent + 1` for a temporary region.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Total capacity of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.span.len()
    }

    /// Current bump offset (bytes allocated so far).
    pub fn pos(&self) -> usize {
        self.pos.get()
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.span.len() - self.pos.get()
    }

    /// Number of temporary regions currently open on this region.
    pub fn open_temps(&self) -> usize {
        self.open.borrow().len()
    }

    /// The error this region currently carries, if any.
    ///
    /// A consumed region reports [`ArenaError::MemoryFreed`].
    pub fn last_error(&self) -> Option<ArenaError> {
        match self.state.get() {
            RegionState::Live => None,
            RegionState::Failed(err) => Some(err),
            RegionState::Consumed => Some(ArenaError::MemoryFreed),
        }
    }

    /// Whether the region is live and carries no error.
    pub fn is_ok(&self) -> bool {
        self.state.get() == RegionState::Live
    }

    /// Whether the region has been freed or released.
    pub fn is_consumed(&self) -> bool {
        self.state.get() == RegionState::Consumed
    }

    /// Bump-allocate `len` bytes.
    ///
    /// On success the returned slice covers `[pos, pos + len)` and `pos`
    /// advances by `len`. The slice is zeroed unless the region was created
    /// with `zero_on_alloc` off.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::OutOfMemory`] if `pos + len` exceeds the capacity. The
    ///   cursor is left unchanged and the error sticks to the region.
    /// - The sticky error, if the region already carries one.
    /// - [`ArenaError::MemoryFreed`] if the region was freed or released.
    #[allow(clippy::mut_from_ref)]
    #[allow(unsafe_code)]
    pub fn alloc(&self, len: usize) -> Result<&mut [u8], ArenaError> {
        let span = self.bump(len)?;
        // SAFETY: `bump` hands out each byte range at most once while it is
        // live. Ranges only return to the free tail through `reset` (which
        // takes `&mut self`, so no slice borrowed from `self` survives) or
        // through releasing a temporary region (whose slices borrow the
        // `TempArena` that `release` takes by `&mut`). The owning block
        // outlives `self` and therefore the returned borrow.
        let bytes = unsafe { span.as_mut_slice() };
        if self.zero_on_alloc {
            bytes.fill(0);
        }
        Ok(bytes)
    }

    /// Allocate a copy of `bytes`.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_copy(&self, bytes: &[u8]) -> Result<&mut [u8], ArenaError> {
        let dst = self.alloc(bytes.len())?;
        dst.copy_from_slice(bytes);
        Ok(dst)
    }

    /// Allocate from a region that may be absent.
    ///
    /// Returns [`ArenaError::NullArena`] without touching anything when
    /// `region` is `None`.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_in(region: Option<&Region>, len: usize) -> Result<&mut [u8], ArenaError> {
        region.ok_or(ArenaError::NullArena)?.alloc(len)
    }

    /// Open a temporary region of `len` bytes carved from this region's
    /// free tail.
    ///
    /// The temporary region has its own cursor starting at 0 and depth
    /// `self.depth() + 1`. It must be released (or dropped) before any
    /// region opened earlier on `self`.
    ///
    /// # Errors
    ///
    /// Same as [`Region::alloc`].
    pub fn temp(&self, len: usize) -> Result<TempArena<'_>, ArenaError> {
        let start = self.pos.get();
        let span = self.bump(len)?;
        let id = RegionId::next();
        self.open.borrow_mut().push(TempFrame { id, start, len });
        debug!(
            parent = %self.id,
            region = %id,
            depth = self.depth + 1,
            start,
            len,
            "temporary region opened"
        );
        let region = Region::new(id, span, self.depth + 1, self.zero_on_alloc);
        Ok(TempArena::new(self, region, start))
    }

    /// Reserve `[pos, pos + len)` and advance the cursor.
    fn bump(&self, len: usize) -> Result<RawSpan, ArenaError> {
        match self.state.get() {
            RegionState::Live => {}
            RegionState::Failed(err) => return Err(err),
            RegionState::Consumed => return Err(ArenaError::MemoryFreed),
        }
        let start = self.pos.get();
        let Some(span) = self.span.sub(start, len) else {
            let err = ArenaError::OutOfMemory {
                requested: len,
                remaining: self.remaining(),
            };
            debug!(region = %self.id, requested = len, remaining = self.remaining(), "allocation failed");
            self.state.set(RegionState::Failed(err));
            return Err(err);
        };
        self.pos.set(start + len);
        trace!(region = %self.id, offset = start, len, "bump allocation");
        Ok(span)
    }

    /// Hand a child's window back to this region.
    ///
    /// Succeeds only if `id` is the most recently opened outstanding child
    /// and nothing has been allocated past its recorded window.
    pub(crate) fn release_child(&self, id: RegionId) -> Result<(), ArenaError> {
        let mut open = self.open.borrow_mut();
        let parent_pos = self.pos.get();
        let refused = |expected_end| ArenaError::ReleasedAfterSiblingAlloc {
            region: id,
            expected_end,
            parent_pos,
        };
        let Some(index) = open.iter().rposition(|frame| frame.id == id) else {
            return Err(refused(parent_pos));
        };
        let frame = open[index];
        let expected_end = frame.start + frame.len;
        if index + 1 != open.len() || parent_pos != expected_end {
            return Err(refused(expected_end));
        }
        open.pop();
        self.pos.set(frame.start);
        debug!(parent = %self.id, region = %id, pos = frame.start, "temporary region released");
        Ok(())
    }

    /// Forget a child that could not be released in order.
    ///
    /// Its bytes stay allocated until this region is reset or freed.
    pub(crate) fn abandon_child(&self, id: RegionId) {
        self.open.borrow_mut().retain(|frame| frame.id != id);
    }

    pub(crate) fn mark_consumed(&self) {
        self.state.set(RegionState::Consumed);
    }

    /// Rewind to empty and clear any sticky error.
    ///
    /// Requires `&mut self`, so no allocation or temporary region borrowed
    /// from this region can still be alive.
    pub(crate) fn rewind(&mut self) {
        if self.is_consumed() {
            return;
        }
        self.pos.set(0);
        self.state.set(RegionState::Live);
        self.open.get_mut().clear();
    }
}
