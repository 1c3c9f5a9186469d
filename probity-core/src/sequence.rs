//! Generation and shrinking shared by every sequence-shaped container.
//!
//! Each container shape implements [`Sequence`] once: an empty value, an
//! insertion policy, and a way to walk its elements. Generation and the
//! binary-split shrink are written against that capability, so the only
//! difference between a `Vec` and a [`ForwardList`] is where new elements go.

use crate::arbitrary::Arbitrary;
use crate::data::Level;
use crate::forward_list::ForwardList;
use std::collections::{LinkedList, VecDeque};

/// Where a container puts newly inserted elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// New elements go to the back; iteration order is insertion order.
    Append,
    /// New elements go to the front; iteration order is reversed.
    Prepend,
}

/// A container shape the sequence adaptor can build and split.
pub trait Sequence: Sized {
    type Item;

    /// Where [`Sequence::insert`] places elements.
    const INSERTION: Insertion;

    fn empty() -> Self;

    /// Insert one element according to [`Sequence::INSERTION`].
    fn insert(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walk the elements in iteration order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// Generate a sequence at a complexity level.
///
/// Level 0 is empty. Otherwise the sequence holds
/// [`Level::element_count`] elements and every element advances both the
/// level and the seed by one.
pub fn generate_sequence<C>(level: usize, seed: u64) -> C
where
    C: Sequence,
    C::Item: Arbitrary,
{
    let mut level = Level::new(level);
    let mut sequence = C::empty();
    let mut seed = seed;
    for _ in 0..level.element_count() {
        sequence.insert(C::Item::generate(level.get(), seed));
        level = level.next();
        seed = seed.wrapping_add(1);
    }
    sequence
}

/// Generate a sequence of exactly `n` elements.
pub fn generate_sequence_n<C>(n: usize, seed: u64) -> C
where
    C: Sequence,
    C::Item: Arbitrary,
{
    let mut sequence = C::empty();
    let mut seed = seed;
    for _ in 0..n {
        sequence.insert(C::Item::generate_n(n, seed));
        seed = seed.wrapping_add(1);
    }
    sequence
}

/// Split a sequence at its midpoint.
///
/// Returns no candidates for an empty sequence, the first half alone for a
/// single element, and both halves otherwise. Halves are rebuilt through
/// [`Sequence::insert`], so a prepending container yields each half in
/// reverse.
pub fn shrink_sequence<C>(sequence: &C) -> Vec<C>
where
    C: Sequence,
    C::Item: Clone,
{
    if sequence.is_empty() {
        return Vec::new();
    }

    let mid = sequence.len() / 2;
    let mut front = C::empty();
    let mut back = C::empty();
    for (index, item) in sequence.items().enumerate() {
        if index < mid {
            front.insert(item.clone());
        } else if mid > 0 {
            back.insert(item.clone());
        } else {
            break;
        }
    }

    let mut candidates = vec![front];
    if mid > 0 {
        candidates.push(back);
    }
    candidates
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    const INSERTION: Insertion = Insertion::Append;

    fn empty() -> Self {
        Vec::new()
    }

    fn insert(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    const INSERTION: Insertion = Insertion::Append;

    fn empty() -> Self {
        VecDeque::new()
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    const INSERTION: Insertion = Insertion::Append;

    fn empty() -> Self {
        LinkedList::new()
    }

    fn insert(&mut self, item: T) {
        self.push_back(item);
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for ForwardList<T> {
    type Item = T;
    const INSERTION: Insertion = Insertion::Prepend;

    fn empty() -> Self {
        ForwardList::new()
    }

    fn insert(&mut self, item: T) {
        self.push_front(item);
    }

    fn len(&self) -> usize {
        ForwardList::len(self)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

macro_rules! arbitrary_sequence {
    ($($container:ident),* $(,)?) => {$(
        impl<T: Arbitrary + Clone> Arbitrary for $container<T> {
            fn generate(level: usize, seed: u64) -> Self {
                generate_sequence(level, seed)
            }

            fn generate_n(n: usize, seed: u64) -> Self {
                generate_sequence_n(n, seed)
            }

            fn shrink(&self) -> Vec<Self> {
                shrink_sequence(self)
            }
        }
    )*};
}

arbitrary_sequence!(Vec, VecDeque, LinkedList, ForwardList);
