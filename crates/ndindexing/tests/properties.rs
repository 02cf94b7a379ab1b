//! Property tests for ndindexing over randomly generated index spaces.
//!
//! Tests cover:
//! - Round trip tuple -> index -> tuple
//! - Bijectivity onto [0, size)
//! - Size consistency
//! - Order sensitivity
//! - Shared use from several threads

use std::collections::HashSet;

use ndindexing::{Indexing, IndexingError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random index space with rank in [1, max_rank], small extents, arbitrary
/// bases and a random permutation.
fn random_indexing(rng: &mut impl Rng, max_rank: usize) -> Indexing {
    let rank = rng.gen_range(1..=max_rank);
    let base: Vec<i32> = (0..rank).map(|_| rng.gen_range(-10..=10)).collect();
    let extent: Vec<i32> = (0..rank).map(|_| rng.gen_range(1..=4)).collect();
    let mut order: Vec<usize> = (0..rank).collect();
    order.shuffle(rng);
    Indexing::new(&base, &extent, &order).unwrap()
}

/// Every legal tuple, enumerated independently of the engine.
fn all_tuples(ind: &Indexing) -> Vec<Vec<i32>> {
    let mut out = vec![Vec::new()];
    for (&b, &e) in ind.base().iter().zip(ind.extent().iter()) {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (b..b + e).map(move |c| {
                    let mut t = prefix.clone();
                    t.push(c);
                    t
                })
            })
            .collect();
    }
    out
}

#[test]
fn test_roundtrip_random_spaces() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let ind = random_indexing(&mut rng, 5);
        for t in all_tuples(&ind) {
            let index = ind.tuple_to_index(&t).unwrap();
            assert_eq!(
                ind.index_to_tuple(index).unwrap(),
                t,
                "roundtrip failed for {:?} in {:?}",
                t,
                ind
            );
        }
    }
}

#[test]
fn test_bijective_onto_flat_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let ind = random_indexing(&mut rng, 4);
        let tuples = all_tuples(&ind);
        let indices: HashSet<i64> = tuples
            .iter()
            .map(|t| ind.tuple_to_index(t).unwrap())
            .collect();

        // No collisions, no gaps.
        assert_eq!(indices.len(), tuples.len());
        assert_eq!(indices, (0..ind.size()).collect::<HashSet<_>>());
    }
}

#[test]
fn test_size_is_product_of_extents() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    for _ in 0..100 {
        let ind = random_indexing(&mut rng, 6);
        let product: i64 = ind.extent().iter().map(|&e| e as i64).product();
        assert_eq!(ind.size(), product);
        assert_eq!(all_tuples(&ind).len() as i64, ind.size());
        assert_eq!(ind.tuples().count() as i64, ind.size());
    }
}

#[test]
fn test_every_index_decodes_inside_space() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..100 {
        let ind = random_indexing(&mut rng, 5);
        for index in 0..ind.size() {
            let t = ind.index_to_tuple(index).unwrap();
            assert!(ind.contains(&t));
            assert_eq!(ind.tuple_to_index(&t).unwrap(), index);
        }
        assert!(matches!(
            ind.index_to_tuple(ind.size()),
            Err(IndexingError::IndexOutOfRange { .. })
        ));
    }
}

#[test]
fn test_order_sensitivity() {
    let base = [0, 0, 0];
    let extent = [2, 3, 4];
    let a: Indexing = Indexing::new(&base, &extent, &[0, 1, 2]).unwrap();
    let b: Indexing = Indexing::new(&base, &extent, &[2, 1, 0]).unwrap();
    let c: Indexing = Indexing::new(&base, &extent, &[1, 0, 2]).unwrap();

    let t = [1, 0, 1];
    let ia = a.tuple_to_index(&t).unwrap();
    let ib = b.tuple_to_index(&t).unwrap();
    let ic = c.tuple_to_index(&t).unwrap();
    assert_eq!(ia, 12 + 1);
    assert_eq!(ib, 1 + 6);
    assert_eq!(ic, 4 + 1);

    // Same size, different layouts.
    assert_eq!(a.size(), b.size());
    assert_ne!(ia, ib);
    assert_ne!(ia, ic);
    assert_ne!(ib, ic);
}

#[test]
fn test_order_irrelevant_for_unit_extents() {
    // Swapping axes of extent 1 does not change any index.
    let a: Indexing = Indexing::new(&[0, 0, 0], &[1, 5, 1], &[0, 1, 2]).unwrap();
    let b: Indexing = Indexing::new(&[0, 0, 0], &[1, 5, 1], &[2, 1, 0]).unwrap();
    for t in a.tuples() {
        assert_eq!(a.tuple_to_index(&t).unwrap(), b.tuple_to_index(&t).unwrap());
    }
}

#[test]
fn test_rank_one() {
    let ind: Indexing = Indexing::new(&[-3], &[7], &[0]).unwrap();
    assert_eq!(ind.size(), 7);
    assert_eq!(ind.tuple_to_index(&[-3]).unwrap(), 0);
    assert_eq!(ind.tuple_to_index(&[3]).unwrap(), 6);
    assert_eq!(ind.index_to_tuple(4).unwrap(), vec![1]);
}

#[test]
fn test_non_permutation_always_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let rank = rng.gen_range(2..=6);
        let mut order: Vec<usize> = (0..rank).collect();
        order.shuffle(&mut rng);
        // Overwrite one entry with a copy of another.
        let i = rng.gen_range(0..rank);
        let j = (i + 1) % rank;
        order[i] = order[j];

        let result = Indexing::<i32, i64>::new(&vec![0; rank], &vec![2; rank], &order);
        assert!(matches!(result, Err(IndexingError::DuplicateAxis { .. })));
    }
}

#[test]
fn test_shared_across_threads() {
    let ind: Indexing = Indexing::new(&[1, -2, 0], &[6, 5, 7], &[1, 2, 0]).unwrap();
    let expected: Vec<i64> = ind
        .tuples()
        .map(|t| ind.tuple_to_index(&t).unwrap())
        .collect();

    let shared = &ind;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    shared
                        .tuples()
                        .map(|t| shared.tuple_to_index(&t).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
