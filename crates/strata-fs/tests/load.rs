//! Reading sample files from disk through arenas.

use strata_arena::ArenaError;
use strata_core::ErrorKind;
use strata_fs::{read_dir, read_file, read_file_in};
use strata_str::Str;
use strata_test_utils::fixtures::{self, SAMPLE_CSV, SAMPLE_WORDS};
use strata_test_utils::init_tracing;

#[test]
fn csv_rows_split_from_an_arena_copy() {
    init_tracing();
    let tree = fixtures::sample_tree().unwrap();
    let arena = fixtures::arena(1024);

    let table = read_file_in(&arena, tree.path().join("table.csv"));
    assert_eq!(table.len(), SAMPLE_CSV.len());

    let mut rows = table.iter();
    let header = rows.split(b'\n');
    assert_eq!(header.iter().splits(b',').count(), 3);

    let first = rows.split(b'\n');
    let mut cols = first.iter();
    cols.split(b',');
    assert_eq!(Str::upper(&arena, cols.split(b',')), "ADA");
}

#[test]
fn owned_and_arena_reads_agree() {
    init_tracing();
    let tree = fixtures::sample_tree().unwrap();
    let path = tree.path().join("words.txt");
    let arena = fixtures::arena(256);

    let owned = read_file(&path).unwrap();
    let in_arena = read_file_in(&arena, &path);
    assert!(Str::compare(owned.as_str(), in_arena));
    assert_eq!(owned.size(), SAMPLE_WORDS.len());
}

#[test]
fn a_failed_read_in_a_temp_leaves_the_parent_clean() {
    init_tracing();
    let tree = fixtures::sample_tree().unwrap();
    let arena = fixtures::arena(256);
    {
        let mut scratch = arena.temp(8).unwrap();
        let s = read_file_in(&scratch, tree.path().join("table.csv"));
        assert_eq!(s.error(), Some(ErrorKind::OutOfMemory));
        assert!(matches!(
            scratch.last_error(),
            Some(ArenaError::OutOfMemory { .. })
        ));
        scratch.release().unwrap();
    }
    assert_eq!(arena.pos(), 0);
    assert!(arena.is_ok());
}

#[test]
fn directory_listing_sees_the_sample_tree() {
    init_tracing();
    let tree = fixtures::sample_tree().unwrap();
    let mut names: Vec<_> = read_dir(tree.path())
        .unwrap()
        .map(|entry| entry.map(|e| (e.name, e.is_dir)))
        .collect::<Result<_, _>>()
        .unwrap();
    names.sort();
    assert_eq!(
        names,
        vec![
            ("nested".to_string(), true),
            ("table.csv".to_string(), false),
            ("words.txt".to_string(), false),
        ]
    );
}
