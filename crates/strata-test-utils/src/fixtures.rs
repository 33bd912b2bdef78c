//! Reusable arenas, sample text, and on-disk scratch trees.

use std::fs;
use std::io;

use strata_arena::{Arena, ArenaConfig};
use tempfile::TempDir;

/// A comma-separated table with a header row and a trailing newline.
pub const SAMPLE_CSV: &str = "id,name,score\n1,ada,97\n2,brian,84\n3,grace,91\n";

/// A sentence of mixed-case ASCII words separated by single spaces.
pub const SAMPLE_WORDS: &str = "The Quick brown Fox jumps OVER the lazy Dog";

/// An arena of `size` bytes.
///
/// # Panics
///
/// If the root block cannot be allocated.
pub fn arena(size: usize) -> Arena {
    match Arena::new(size) {
        Ok(arena) => arena,
        Err(err) => panic!("fixture arena of {size} bytes: {err}"),
    }
}

/// An arena that skips zeroing, for benchmarks.
pub fn unzeroed_arena(size: usize) -> Arena {
    match Arena::with_config(&ArenaConfig::new(size).zero_on_alloc(false)) {
        Ok(arena) => arena,
        Err(err) => panic!("fixture arena of {size} bytes: {err}"),
    }
}

/// `count` lines of the form `key{i}=value{i}`, newline-terminated.
pub fn key_value_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("key{i}=value{i}\n"))
        .collect()
}

/// A temporary directory holding `SAMPLE_CSV` as `table.csv`,
/// `SAMPLE_WORDS` as `words.txt`, and an empty `nested/` directory.
pub fn sample_tree() -> io::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("table.csv"), SAMPLE_CSV)?;
    fs::write(dir.path().join("words.txt"), SAMPLE_WORDS)?;
    fs::create_dir(dir.path().join("nested"))?;
    Ok(dir)
}
