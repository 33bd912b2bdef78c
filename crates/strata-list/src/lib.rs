//! Capacity-bounded lists for the strata workspace.
//!
//! A [`FixedList`] makes exactly one allocation, sized at creation, and
//! never grows: pushing past capacity fails with [`ListError::Full`]
//! instead of reallocating. Length and capacity live next to the storage,
//! so both are O(1) reads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::FixedList;
