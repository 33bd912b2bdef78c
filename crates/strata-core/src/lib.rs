//! Core types shared by every crate in the strata workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed [`ErrorKind`] table carried by every fallible value, the
//! [`RegionId`] identity tag used by temporary arena regions, and the
//! fatal-error reporter ([`fatal!`]) used for programming defects that must
//! not be recovered from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fatal;
pub mod id;

pub use error::ErrorKind;
pub use id::RegionId;
