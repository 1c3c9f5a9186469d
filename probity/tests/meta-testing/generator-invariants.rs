//! Generator invariant properties
//!
//! These properties ensure generators yield minimal values at level 0, are
//! deterministic in `(level, seed)`, and size sequences by level.

use crate::meta_check;
use probity::*;
use std::collections::{LinkedList, VecDeque};

/// Property: Level 0 yields the minimal value for every seed
pub fn test_level_zero_is_minimal() {
    meta_check("level_zero_is_minimal", 50, |&seed: &u64| {
        Vec::<i32>::generate(0, seed).is_empty()
            && VecDeque::<u8>::generate(0, seed).is_empty()
            && LinkedList::<String>::generate(0, seed).is_empty()
            && ForwardList::<bool>::generate(0, seed).is_empty()
            && String::generate(0, seed).is_empty()
            && i64::generate(0, seed) == 0
            && f64::generate(0, seed) == 0.0
            && Option::<u8>::generate(0, seed).is_none()
    });
}

/// Property: Same level and seed produce the same value
pub fn test_generator_determinism() {
    meta_check(
        "generator_determinism",
        50,
        |&(level, seed): &(usize, u64)| {
            Vec::<Vec<u16>>::generate(level, seed) == Vec::<Vec<u16>>::generate(level, seed)
                && String::generate(level, seed) == String::generate(level, seed)
        },
    );
}

/// Property: Sequence length is `10 * (level / 100 + 1)` for positive levels
pub fn test_sequence_counts_follow_level() {
    meta_check("sequence_counts", 50, |&(level, seed): &(usize, u64)| {
        let expected = if level == 0 { 0 } else { 10 * (level / 100 + 1) };
        Vec::<u8>::generate(level, seed).len() == expected
            && LinkedList::<u8>::generate(level, seed).len() == expected
            && Vec::<u8>::generate_n(level, seed).len() == level
    });
}

/// Property: A front-inserting list holds the generated elements reversed
pub fn test_forward_list_reverses_generation() {
    meta_check("forward_list_order", 50, |&(level, seed): &(usize, u64)| {
        let appended: Vec<i32> = Vec::generate(level, seed);
        let prepended: ForwardList<i32> = ForwardList::generate(level, seed);
        prepended.iter().copied().eq(appended.into_iter().rev())
    });
}
