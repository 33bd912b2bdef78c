//! The [`Str`] view and its read-only operations.

use std::borrow::Cow;
use std::fmt;

use strata_core::{fatal, ErrorKind};

use crate::split::StrIter;

/// A non-owning byte view that may instead carry an error.
///
/// `Str` is `Copy`; it borrows its bytes from whatever produced them (a
/// literal, a file buffer, an arena allocation) and lives no longer than
/// that buffer. An errored `Str` has length 0.
///
/// Equality follows [`Str::compare`]: an errored `Str` is unequal to
/// everything, itself included, which is why `Str` implements
/// `PartialEq` but not `Eq`.
#[derive(Clone, Copy)]
pub struct Str<'a> {
    inner: Result<&'a [u8], ErrorKind>,
}

impl<'a> Str<'a> {
    /// View existing bytes without copying.
    pub const fn literal(bytes: &'a [u8]) -> Self {
        Self { inner: Ok(bytes) }
    }

    /// An errored view carrying `kind`.
    pub const fn errored(kind: ErrorKind) -> Self {
        Self { inner: Err(kind) }
    }

    /// View bytes that may be absent; `None` yields
    /// [`ErrorKind::NullArgument`].
    pub fn from_opt(bytes: Option<&'a [u8]>) -> Self {
        match bytes {
            Some(bytes) => Self::literal(bytes),
            None => Self::errored(ErrorKind::NullArgument),
        }
    }

    /// The viewed bytes, or an empty slice if errored.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.inner.unwrap_or(&[])
    }

    /// Number of bytes (0 if errored).
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the view has no bytes (always true if errored).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the view carries no error.
    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// The carried error, if any.
    pub fn error(&self) -> Option<ErrorKind> {
        self.inner.err()
    }

    /// Convert to a plain `Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<&'a [u8], ErrorKind> {
        self.inner
    }

    /// The bytes decoded as UTF-8, replacing invalid sequences.
    pub fn to_str_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// The byte at `pos`.
    ///
    /// # Panics
    ///
    /// Fatal if the view is errored or `pos >= len`. Out-of-range indexing
    /// is a programming defect, not a recoverable condition.
    #[track_caller]
    pub fn char_at(&self, pos: usize) -> u8 {
        match self.inner {
            Err(kind) => fatal!("char_at on errored string: {kind}"),
            Ok(bytes) => match bytes.get(pos) {
                Some(&b) => b,
                None => fatal!(
                    "string index out of bounds: index {pos}, length {}",
                    bytes.len()
                ),
            },
        }
    }

    /// Occurrences of `byte`; 0 if errored.
    pub fn count(&self, byte: u8) -> usize {
        memchr::memchr_iter(byte, self.as_bytes()).count()
    }

    /// Index of the first occurrence of `byte`.
    ///
    /// `None` means "not found" and is also the answer for an errored view;
    /// it is a sentinel, not an error.
    pub fn find(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.as_bytes())
    }

    /// Byte-for-byte equality. Any errored side makes this `false`.
    pub fn compare(a: Str<'_>, b: Str<'_>) -> bool {
        match (a.inner, b.inner) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// A splitting iterator positioned at byte 0, inheriting any error.
    pub fn iter(self) -> StrIter<'a> {
        StrIter::new(self)
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(s: &'a str) -> Self {
        Self::literal(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Str<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::literal(bytes)
    }
}

impl<'a> From<Result<&'a [u8], ErrorKind>> for Str<'a> {
    fn from(inner: Result<&'a [u8], ErrorKind>) -> Self {
        Self { inner }
    }
}

impl PartialEq for Str<'_> {
    fn eq(&self, other: &Self) -> bool {
        Str::compare(*self, *other)
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        Str::compare(*self, Str::from(*other))
    }
}

impl PartialEq<&[u8]> for Str<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        Str::compare(*self, Str::literal(other))
    }
}

impl fmt::Debug for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            Ok(bytes) => write!(f, "Str({:?})", String::from_utf8_lossy(bytes)),
            Err(kind) => write!(f, "Str(<{kind:?}>)"),
        }
    }
}

/// Writes the bytes lossily as UTF-8; an errored view writes nothing.
impl fmt::Display for Str<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}
