//! List-specific error types.

use std::error::Error;
use std::fmt;

use strata_core::ErrorKind;

/// Errors that can occur during list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The system allocator could not provide the backing storage.
    OutOfMemory {
        /// Number of elements requested.
        capacity: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
    /// The list already holds `capacity` elements.
    Full {
        /// The list's fixed capacity.
        capacity: usize,
    },
}

impl ListError {
    /// The closed error kind this error maps onto.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfMemory { .. } => ErrorKind::OutOfMemory,
            Self::Full { .. } => ErrorKind::ListFull,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                capacity,
                element_size,
            } => {
                write!(
                    f,
                    "out of memory: cannot allocate {capacity} elements of {element_size} bytes"
                )
            }
            Self::Full { capacity } => write!(f, "list is full (capacity {capacity})"),
        }
    }
}

impl Error for ListError {}

impl From<ListError> for ErrorKind {
    fn from(err: ListError) -> Self {
        err.kind()
    }
}
