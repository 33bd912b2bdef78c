//! Error-carrying byte views over strata arenas.
//!
//! A [`Str`] is either a borrowed byte slice or an
//! [`ErrorKind`](strata_core::ErrorKind). Every operation on an errored
//! `Str` returns an equally errored result without doing any work, in
//! particular without allocating, so chains of string operations compose
//! without a check at each step:
//!
//! ```
//! use strata_arena::Arena;
//! use strata_str::Str;
//!
//! let arena = Arena::new(32).unwrap();
//! let greeting = Str::concat(&arena, Str::from("hello, "), Str::from("world"));
//! let shout = Str::upper(&arena, greeting);
//! assert_eq!(shout, "HELLO, WORLD");
//!
//! // Once anything fails, the failure flows through untouched.
//! let too_big = Str::concat(&arena, shout, shout);
//! let still_bad = Str::lower(&arena, too_big);
//! assert!(!still_bad.is_ok());
//! assert_eq!(still_bad.len(), 0);
//! ```
//!
//! Bytes are bytes: there is no encoding beyond ASCII case folding.
//! Indexing past the end with [`Str::char_at`] is a programming defect and
//! goes through the fatal reporter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod alloc;
pub mod split;
pub mod view;

pub use split::{IterState, Splits, StrIter};
pub use view::Str;
