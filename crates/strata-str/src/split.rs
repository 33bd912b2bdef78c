//! Cursor-based splitting over a [`Str`].
//!
//! [`StrIter`] is a small state machine:
//!
//! ```text
//! Active --split(found)-----> Active
//! Active --split(not found)-> Terminal
//! Terminal / Errored --split--> (no change, errored empty Str)
//! ```
//!
//! Nothing ever leads back to `Active`. [`Splits`] wraps the same machine
//! as a standard [`Iterator`].

use strata_core::ErrorKind;

use crate::view::Str;

/// Where a [`StrIter`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterState {
    /// More segments may follow.
    Active,
    /// The final segment has been produced.
    Terminal,
    /// The source string was errored; no segment will ever be produced.
    Errored(ErrorKind),
}

/// A forward-only splitting cursor over a string.
#[derive(Clone, Copy, Debug)]
pub struct StrIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: IterState,
}

impl<'a> StrIter<'a> {
    /// Start at byte 0 of `s`. An errored `s` yields an errored iterator.
    pub fn new(s: Str<'a>) -> Self {
        match s.into_result() {
            Ok(bytes) => Self {
                bytes,
                pos: 0,
                state: IterState::Active,
            },
            Err(kind) => Self {
                bytes: &[],
                pos: 0,
                state: IterState::Errored(kind),
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> IterState {
        self.state
    }

    /// Cursor position in the source bytes.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The error a further `split` would report, if any.
    ///
    /// [`ErrorKind::IterationFinished`] once terminal.
    pub fn error(&self) -> Option<ErrorKind> {
        match self.state {
            IterState::Active => None,
            IterState::Terminal => Some(ErrorKind::IterationFinished),
            IterState::Errored(kind) => Some(kind),
        }
    }

    /// Whether `split` can still produce a segment.
    pub fn is_active(&self) -> bool {
        self.state == IterState::Active
    }

    /// The next segment, up to but excluding the next `delim`.
    ///
    /// If `delim` is found the cursor moves past it and the iterator stays
    /// active. Otherwise the rest of the string is returned as the final
    /// segment and the iterator becomes terminal. On a terminal or errored
    /// iterator this returns an errored empty `Str` and changes nothing.
    pub fn split(&mut self, delim: u8) -> Str<'a> {
        match self.state {
            IterState::Active => {}
            IterState::Terminal => return Str::errored(ErrorKind::IterationFinished),
            IterState::Errored(kind) => return Str::errored(kind),
        }
        let rest = &self.bytes[self.pos..];
        match memchr::memchr(delim, rest) {
            Some(at) => {
                self.pos += at + 1;
                Str::literal(&rest[..at])
            }
            None => {
                self.pos = self.bytes.len();
                self.state = IterState::Terminal;
                Str::literal(rest)
            }
        }
    }

    /// Adapt into a standard iterator over the segments split on `delim`.
    pub fn splits(self, delim: u8) -> Splits<'a> {
        Splits { iter: self, delim }
    }
}

/// [`Iterator`] over the segments of a [`StrIter`].
///
/// Yields every segment `split` would return while the iterator is active,
/// then `None`. An errored source yields nothing.
#[derive(Clone, Debug)]
pub struct Splits<'a> {
    iter: StrIter<'a>,
    delim: u8,
}

impl<'a> Splits<'a> {
    /// The underlying cursor.
    pub fn as_iter(&self) -> &StrIter<'a> {
        &self.iter
    }
}

impl<'a> Iterator for Splits<'a> {
    type Item = Str<'a>;

    fn next(&mut self) -> Option<Str<'a>> {
        self.iter.is_active().then(|| self.iter.split(self.delim))
    }
}

impl std::iter::FusedIterator for Splits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiter_then_finishes() {
        let mut it = Str::from("a,bb,ccc").iter();
        assert_eq!(it.split(b','), "a");
        assert_eq!(it.state(), IterState::Active);
        assert_eq!(it.split(b','), "bb");
        assert_eq!(it.split(b','), "ccc");
        assert_eq!(it.state(), IterState::Terminal);

        let after = it.split(b',');
        assert_eq!(after.error(), Some(ErrorKind::IterationFinished));
        assert_eq!(after.len(), 0);
        // Terminal is sticky.
        assert_eq!(it.split(b',').error(), Some(ErrorKind::IterationFinished));
        assert_eq!(it.pos(), 8);
    }

    #[test]
    fn empty_source_yields_one_empty_segment() {
        let mut it = Str::from("").iter();
        let seg = it.split(b',');
        assert!(seg.is_ok());
        assert!(seg.is_empty());
        assert_eq!(it.state(), IterState::Terminal);
    }

    #[test]
    fn adjacent_and_trailing_delimiters_give_empty_segments() {
        let segs: Vec<_> = Str::from("x,,y,").iter().splits(b',').collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], "x");
        assert_eq!(segs[1], "");
        assert_eq!(segs[2], "y");
        assert_eq!(segs[3], "");
    }

    #[test]
    fn no_delimiter_returns_whole_string() {
        let mut it = Str::from("whole").iter();
        assert_eq!(it.split(b'|'), "whole");
        assert!(!it.is_active());
    }

    #[test]
    fn errored_source_is_inherited() {
        let mut it = Str::errored(ErrorKind::NullArgument).iter();
        assert_eq!(it.state(), IterState::Errored(ErrorKind::NullArgument));
        assert_eq!(it.split(b',').error(), Some(ErrorKind::NullArgument));
        assert_eq!(it.error(), Some(ErrorKind::NullArgument));
        assert_eq!(
            Str::errored(ErrorKind::NullArgument)
                .iter()
                .splits(b',')
                .count(),
            0
        );
    }

    #[test]
    fn segments_borrow_the_source() {
        let text = String::from("left=right");
        let mut it = Str::from(text.as_str()).iter();
        let left = it.split(b'=');
        assert_eq!(left.as_bytes().as_ptr(), text.as_ptr());
        assert_eq!(it.split(b'=').as_bytes().as_ptr(), text[5..].as_ptr());
    }

    #[test]
    fn splits_is_fused() {
        let mut splits = Str::from("a").iter().splits(b',');
        assert!(splits.next().is_some());
        assert!(splits.next().is_none());
        assert!(splits.next().is_none());
        assert_eq!(splits.as_iter().state(), IterState::Terminal);
    }
}
