//! The closed error-kind table shared by every strata crate.
//!
//! Each crate reports failures through its own error enum carrying context
//! (`ArenaError`, `ListError`, `FsError`), and every one of those maps onto
//! exactly one [`ErrorKind`]. Values that carry their error inline (such as
//! an errored string view) store the bare kind.

use std::error::Error;
use std::fmt;

use crate::fatal;

/// Recoverable error kinds.
///
/// The numeric codes are stable: `0` is reserved for "no error" and is never
/// produced by [`ErrorKind::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading a file failed for a reason other than a missing path.
    FileRead,
    /// An allocator (system or arena) could not satisfy a request.
    OutOfMemory,
    /// The memory behind a region was already freed or released.
    MemoryFreed,
    /// A root arena was freed, or a temporary region released, twice.
    DoubleFree,
    /// A temporary region was released out of LIFO order.
    ReleasedAfterSiblingAlloc,
    /// `free` was called on a temporary region.
    CannotFreeNonRootRegion,
    /// A splitting iterator has already produced its final segment.
    IterationFinished,
    /// A fixed-capacity list has no room left.
    ListFull,
    /// A required input was absent.
    NullArgument,
    /// The requested path does not exist.
    NotFound,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 10] = [
        Self::FileRead,
        Self::OutOfMemory,
        Self::MemoryFreed,
        Self::DoubleFree,
        Self::ReleasedAfterSiblingAlloc,
        Self::CannotFreeNonRootRegion,
        Self::IterationFinished,
        Self::ListFull,
        Self::NullArgument,
        Self::NotFound,
    ];

    /// Human-readable description of the kind.
    pub fn message(self) -> &'static str {
        match self {
            Self::FileRead => "failed to read from file",
            Self::OutOfMemory => "out of memory",
            Self::MemoryFreed => "memory already freed",
            Self::DoubleFree => "memory freed more than once",
            Self::ReleasedAfterSiblingAlloc => {
                "temporary region released after a later allocation in its parent"
            }
            Self::CannotFreeNonRootRegion => "temporary regions are released, not freed",
            Self::IterationFinished => "iteration finished",
            Self::ListFull => "list is at capacity",
            Self::NullArgument => "required argument was absent",
            Self::NotFound => "file or directory not found",
        }
    }

    /// Stable numeric code, starting at 1.
    pub fn code(self) -> u8 {
        match self {
            Self::FileRead => 1,
            Self::OutOfMemory => 2,
            Self::MemoryFreed => 3,
            Self::DoubleFree => 4,
            Self::ReleasedAfterSiblingAlloc => 5,
            Self::CannotFreeNonRootRegion => 6,
            Self::IterationFinished => 7,
            Self::ListFull => 8,
            Self::NullArgument => 9,
            Self::NotFound => 10,
        }
    }

    /// Look up a kind by its numeric code.
    ///
    /// Returns `None` for `0` ("no error").
    ///
    /// # Panics
    ///
    /// An unknown code is a programming defect and goes through the fatal
    /// reporter.
    pub fn from_code(code: u8) -> Option<Self> {
        if code == 0 {
            return None;
        }
        match Self::ALL.iter().find(|kind| kind.code() == code) {
            Some(&kind) => Some(kind),
            None => fatal!("invalid error code {code}"),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_are_unique_and_nonzero() {
        for (i, a) in ErrorKind::ALL.iter().enumerate() {
            assert_ne!(a.code(), 0);
            for b in &ErrorKind::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a code");
            }
        }
    }

    #[test]
    fn zero_means_no_error() {
        assert_eq!(ErrorKind::from_code(0), None);
    }

    #[test]
    fn every_kind_has_a_message() {
        for kind in ErrorKind::ALL {
            assert!(!kind.message().is_empty());
            assert_eq!(kind.to_string(), kind.message());
        }
    }

    #[test]
    #[should_panic(expected = "invalid error code 200")]
    fn unknown_code_is_fatal() {
        let _ = ErrorKind::from_code(200);
    }

    proptest! {
        #[test]
        fn code_lookup_inverts_code(idx in 0usize..ErrorKind::ALL.len()) {
            let kind = ErrorKind::ALL[idx];
            prop_assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
    }
}
