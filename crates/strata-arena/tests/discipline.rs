//! Property tests for bump monotonicity and temporary-region LIFO discipline.

use proptest::prelude::*;
use strata_arena::{Arena, ArenaError};

proptest! {
    #[test]
    fn pos_is_monotonic_and_bounded(
        size in 0usize..512,
        requests in prop::collection::vec(0usize..96, 0..32),
    ) {
        let arena = Arena::new(size).unwrap();
        let mut last = arena.pos();
        for len in requests {
            let before = arena.pos();
            match arena.alloc(len) {
                Ok(bytes) => {
                    prop_assert_eq!(bytes.len(), len);
                    prop_assert_eq!(arena.pos(), before + len);
                }
                Err(err) => {
                    let oom = matches!(err, ArenaError::OutOfMemory { .. });
                    prop_assert!(oom);
                    prop_assert_eq!(arena.pos(), before);
                    prop_assert!(arena.last_error().is_some());
                }
            }
            prop_assert!(arena.pos() >= last);
            prop_assert!(arena.pos() <= arena.capacity());
            last = arena.pos();
        }
    }

    #[test]
    fn lifo_release_restores_parent(
        prefix in 0usize..64,
        sizes in prop::collection::vec(0usize..32, 1..8),
    ) {
        let arena = Arena::new(1024).unwrap();
        arena.alloc(prefix).unwrap();
        let before = arena.pos();

        let mut temps = Vec::new();
        for &len in &sizes {
            temps.push(arena.temp(len).unwrap());
        }
        prop_assert_eq!(arena.pos(), before + sizes.iter().sum::<usize>());

        while let Some(mut temp) = temps.pop() {
            // Every older temp is refused while a newer one is still open.
            if let Some(oldest) = temps.first_mut() {
                let refused = matches!(
                    oldest.release(),
                    Err(ArenaError::ReleasedAfterSiblingAlloc { .. })
                );
                prop_assert!(refused);
            }
            prop_assert!(temp.release().is_ok());
        }
        prop_assert_eq!(arena.pos(), before);
        prop_assert_eq!(arena.open_temps(), 0);
    }
}

#[test]
fn two_siblings_release_in_reverse() {
    let arena = Arena::new(256).unwrap();
    arena.alloc(7).unwrap();
    let mut t1 = arena.temp(40).unwrap();
    let mut t2 = arena.temp(40).unwrap();

    assert!(matches!(
        t1.release(),
        Err(ArenaError::ReleasedAfterSiblingAlloc { .. })
    ));
    t2.release().unwrap();
    t1.release().unwrap();
    assert_eq!(arena.pos(), 7);

    assert_eq!(t1.release().unwrap_err(), ArenaError::DoubleFree);
    assert_eq!(t2.release().unwrap_err(), ArenaError::DoubleFree);
    assert_eq!(arena.pos(), 7);
}

#[test]
fn allocations_in_nested_temps_are_independent() {
    let arena = Arena::new(256).unwrap();
    let outer = arena.temp(128).unwrap();
    let a = outer.alloc(8).unwrap();
    a.fill(1);
    {
        let inner = outer.temp(32).unwrap();
        inner.alloc(32).unwrap().fill(2);
        assert!(inner.alloc(1).is_err());
        // The inner failure does not leak into the outer region.
        assert!(outer.is_ok());
    }
    let b = outer.alloc(8).unwrap();
    assert_eq!(a, &[1u8; 8]);
    assert_eq!(b, &[0u8; 8]);
    assert_eq!(outer.pos(), 16);
}

#[test]
fn double_free_leaves_state_alone() {
    let mut arena = Arena::new(64).unwrap();
    arena.free().unwrap();
    assert_eq!(arena.free(), Err(ArenaError::DoubleFree));
    assert_eq!(arena.last_error(), Some(ArenaError::MemoryFreed));
}
