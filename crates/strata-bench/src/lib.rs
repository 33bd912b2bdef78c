//! Benchmark workloads for the strata crates.
//!
//! Each workload is a plain function over an arena so that benches and
//! ad-hoc profiling runs measure the same thing:
//!
//! - [`nested_scratch`]: open, fill and release a stack of temporary regions
//! - [`fold_words`]: split a line and case-fold every word into the arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_arena::{ArenaError, Region};
use strata_core::ErrorKind;
use strata_str::Str;

/// Open `depth` nested temporary regions of `chunk` bytes each, write one
/// allocation into each, then release them innermost first.
///
/// Returns the total number of bytes written.
pub fn nested_scratch(parent: &Region, depth: usize, chunk: usize) -> Result<usize, ArenaError> {
    if depth == 0 {
        return Ok(0);
    }
    let mut temp = parent.temp(chunk * depth)?;
    let bytes = temp.alloc(chunk)?;
    bytes.fill(0xA5);
    let inner = nested_scratch(&temp, depth - 1, chunk)?;
    temp.release()?;
    Ok(chunk + inner)
}

/// Split `line` on spaces and upper-case each word into `arena`.
///
/// Returns the number of words folded, or the first error hit.
pub fn fold_words(arena: &Region, line: Str<'_>) -> Result<usize, ErrorKind> {
    let mut folded = 0;
    for word in line.iter().splits(b' ') {
        Str::upper(arena, word).into_result()?;
        folded += 1;
    }
    Ok(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_arena::Arena;

    #[test]
    fn nested_scratch_leaves_parent_untouched() {
        let arena = Arena::new(4096).unwrap();
        assert_eq!(nested_scratch(&arena, 4, 16).unwrap(), 64);
        assert_eq!(arena.pos(), 0);
        assert_eq!(arena.open_temps(), 0);
    }

    #[test]
    fn fold_words_counts_words() {
        let arena = Arena::new(256).unwrap();
        assert_eq!(fold_words(&arena, Str::from("a bb ccc")).unwrap(), 3);
        assert_eq!(arena.pos(), 6);
    }
}
