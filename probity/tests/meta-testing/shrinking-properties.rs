//! Shrinking correctness properties
//!
//! These properties ensure structural shrinking splits containers at the
//! midpoint, never returns the original, and converges.

use crate::meta_check;
use probity::*;
use std::collections::VecDeque;

/// Property: Empty sequences have no shrink candidates
pub fn test_shrink_of_empty_is_empty() {
    assert!(Vec::<u8>::new().shrink().is_empty());
    assert!(VecDeque::<u8>::new().shrink().is_empty());
    assert!(ForwardList::<u8>::new().shrink().is_empty());
    assert!(String::new().shrink().is_empty());
}

/// Property: One candidate for a single element, two halves otherwise
pub fn test_shrink_candidate_sizes() {
    meta_check("shrink_candidate_sizes", 100, |&seed: &u64| {
        let values = &Vec::<u8>::generate_n((seed % 41) as usize, seed);
        let candidates = values.shrink();
        let size = values.len();
        match size {
            0 => candidates.is_empty(),
            1 => candidates.len() == 1 && candidates[0].is_empty(),
            _ => {
                candidates.len() == 2
                    && candidates[0].len() == size / 2
                    && candidates[1].len() == size - size / 2
                    && candidates.iter().all(|candidate| candidate != values)
            }
        }
    });
}

/// Property: Tail-inserting shrinks concatenate back to the original
///
/// A single element has only the empty candidate, which cannot rebuild it.
pub fn test_tail_insert_shrinks_reconstruct() {
    meta_check("tail_insert_reconstructs", 100, |&seed: &u64| {
        let values = &VecDeque::<i16>::generate_n((seed % 33) as usize, seed);
        let candidates = values.shrink();
        if values.len() == 1 {
            return candidates.len() == 1 && candidates[0].is_empty();
        }

        let rebuilt: VecDeque<i16> = candidates
            .into_iter()
            .flat_map(|candidate| candidate.into_iter())
            .collect();
        &rebuilt == values
    });
}

/// Property: Front-inserting shrinks hold each half in reverse
pub fn test_front_insert_shrinks_follow_insertion() {
    meta_check(
        "front_insert_follows_insertion",
        100,
        |&seed: &u64| {
            let values = ForwardList::<i16>::generate_n((seed % 33) as usize, seed);
            let original: Vec<i16> = values.iter().copied().collect();
            let mid = original.len() / 2;
            let (front, back) = original.split_at(mid);

            let mut expected: Vec<i16> = front.iter().rev().copied().collect();
            if mid > 0 {
                expected.extend(back.iter().rev());
            }

            let rebuilt: Vec<i16> = values
                .shrink()
                .iter()
                .flat_map(|candidate| candidate.iter().copied())
                .collect();
            rebuilt == expected
        },
    );
}

/// Property: Following the first candidate reaches an empty value
pub fn test_repeated_shrinking_converges() {
    meta_check("shrinking_converges", 100, |&seed: &u64| {
        let mut current = Vec::<u32>::generate_n(seed as usize, seed);
        let mut steps = 0;
        while let Some(next) = current.shrink().into_iter().next() {
            current = next;
            steps += 1;
            if steps > 64 {
                return false;
            }
        }
        current.is_empty()
    });
}
