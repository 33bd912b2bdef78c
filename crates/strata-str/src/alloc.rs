//! Arena-backed constructors for [`Str`].
//!
//! Each constructor performs at most one arena allocation and returns a
//! view into it, owned by the arena for the arena's lifetime. An errored
//! input short-circuits before the arena is touched.

use strata_arena::Region;
use strata_core::ErrorKind;

use crate::view::Str;

impl<'a> Str<'a> {
    /// Copy `bytes` into a fresh allocation in `arena`.
    ///
    /// Errors from the arena (out of memory, released region) become the
    /// returned view's error.
    pub fn alloc(arena: &'a Region, bytes: &[u8]) -> Self {
        Self::from_arena(arena, bytes.len(), |dst| dst.copy_from_slice(bytes))
    }

    /// [`Str::alloc`] for inputs that may be absent.
    ///
    /// A missing arena or missing bytes yield [`ErrorKind::NullArgument`]
    /// without allocating.
    pub fn alloc_opt(arena: Option<&'a Region>, bytes: Option<&[u8]>) -> Self {
        match (arena, bytes) {
            (Some(arena), Some(bytes)) => Self::alloc(arena, bytes),
            _ => Self::errored(ErrorKind::NullArgument),
        }
    }

    /// Deep-copy `s` into `arena`. The copy is independent of `s`'s buffer.
    pub fn copy(arena: &'a Region, s: Str<'_>) -> Self {
        match s.into_result() {
            Ok(bytes) => Self::alloc(arena, bytes),
            Err(kind) => Self::errored(kind),
        }
    }

    /// A new copy of `s` with `a..=z` mapped to `A..=Z`.
    ///
    /// Every other byte, including non-ASCII, passes through unchanged.
    pub fn upper(arena: &'a Region, s: Str<'_>) -> Self {
        match s.into_result() {
            Ok(bytes) => Self::from_arena(arena, bytes.len(), |dst| {
                dst.copy_from_slice(bytes);
                dst.make_ascii_uppercase();
            }),
            Err(kind) => Self::errored(kind),
        }
    }

    /// A new copy of `s` with `A..=Z` mapped to `a..=z`.
    ///
    /// Every other byte, including non-ASCII, passes through unchanged.
    pub fn lower(arena: &'a Region, s: Str<'_>) -> Self {
        match s.into_result() {
            Ok(bytes) => Self::from_arena(arena, bytes.len(), |dst| {
                dst.copy_from_slice(bytes);
                dst.make_ascii_lowercase();
            }),
            Err(kind) => Self::errored(kind),
        }
    }

    /// `a` followed by `b` in a single new allocation.
    ///
    /// If either input is errored the result carries the first error and
    /// the arena is not touched.
    pub fn concat(arena: &'a Region, a: Str<'_>, b: Str<'_>) -> Self {
        let (a, b) = match (a.into_result(), b.into_result()) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(kind), _) | (_, Err(kind)) => return Self::errored(kind),
        };
        Self::from_arena(arena, a.len() + b.len(), |dst| {
            let (head, tail) = dst.split_at_mut(a.len());
            head.copy_from_slice(a);
            tail.copy_from_slice(b);
        })
    }

    fn from_arena(arena: &'a Region, len: usize, fill: impl FnOnce(&mut [u8])) -> Self {
        match arena.alloc(len) {
            Ok(dst) => {
                fill(&mut *dst);
                Self::literal(dst)
            }
            Err(err) => Self::errored(err.kind()),
        }
    }
}
