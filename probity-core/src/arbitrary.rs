//! The generator protocol and leaf generators.

use crate::data::{mix, mix_up_to, Level};
use std::fmt::Debug;

/// Types that can produce pseudo-random values of themselves and shrink them.
///
/// Generation is deterministic in `(level, seed)`: the same pair always
/// yields the same value. `generate(0, _)` yields the minimal value of the
/// type.
pub trait Arbitrary: Sized + Debug {
    /// Generate a value at the given complexity level.
    fn generate(level: usize, seed: u64) -> Self;

    /// Generate a value using `n` as an explicit target size.
    ///
    /// Containers produce exactly `n` elements. Scalars treat `n` as a level.
    fn generate_n(n: usize, seed: u64) -> Self;

    /// Candidates strictly smaller than `self`.
    ///
    /// An empty list means the value is locally minimal. The default
    /// performs no shrinking.
    fn shrink(&self) -> Vec<Self> {
        Vec::new()
    }
}

macro_rules! arbitrary_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Arbitrary for $ty {
            fn generate(level: usize, seed: u64) -> Self {
                if level == 0 {
                    return 0;
                }
                let bound = (level as u128).min(<$ty>::MAX as u128).min(u64::MAX as u128) as u64;
                mix_up_to(seed, bound) as $ty
            }

            fn generate_n(n: usize, seed: u64) -> Self {
                Self::generate(n, seed)
            }
        }
    )*};
}

arbitrary_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! arbitrary_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Arbitrary for $ty {
            fn generate(level: usize, seed: u64) -> Self {
                if level == 0 {
                    return 0.0;
                }
                let unit = (mix(seed) >> 11) as f64 / (1u64 << 53) as f64;
                (unit * level as f64) as $ty
            }

            fn generate_n(n: usize, seed: u64) -> Self {
                Self::generate(n, seed)
            }
        }
    )*};
}

arbitrary_float!(f32, f64);

impl Arbitrary for bool {
    fn generate(level: usize, seed: u64) -> Self {
        level != 0 && mix(seed) & 1 == 1
    }

    fn generate_n(n: usize, seed: u64) -> Self {
        Self::generate(n, seed)
    }
}

/// Printable ASCII, space through tilde.
const PRINTABLE: std::ops::RangeInclusive<u8> = b' '..=b'~';

impl Arbitrary for char {
    fn generate(level: usize, seed: u64) -> Self {
        if level == 0 {
            return '\0';
        }
        let span = (PRINTABLE.end() - PRINTABLE.start()) as u64;
        (PRINTABLE.start() + mix_up_to(seed, span) as u8) as char
    }

    fn generate_n(n: usize, seed: u64) -> Self {
        Self::generate(n, seed)
    }
}

impl Arbitrary for String {
    fn generate(level: usize, seed: u64) -> Self {
        let mut level = Level::new(level);
        let count = level.element_count();
        let mut seed = seed;
        let mut value = String::with_capacity(count);
        for _ in 0..count {
            // A char at level 0 is NUL, keep every character printable.
            value.push(char::generate(level.get().max(1), seed));
            level = level.next();
            seed = seed.wrapping_add(1);
        }
        value
    }

    fn generate_n(n: usize, seed: u64) -> Self {
        (0..n)
            .map(|i| char::generate_n(n.max(1), seed.wrapping_add(i as u64)))
            .collect()
    }

    fn shrink(&self) -> Vec<Self> {
        if self.is_empty() {
            return Vec::new();
        }
        let chars: Vec<char> = self.chars().collect();
        let mid = chars.len() / 2;
        let mut candidates = vec![chars[..mid].iter().collect::<String>()];
        if mid > 0 {
            candidates.push(chars[mid..].iter().collect());
        }
        candidates
    }
}

impl Arbitrary for () {
    fn generate(_level: usize, _seed: u64) -> Self {}

    fn generate_n(_n: usize, _seed: u64) -> Self {}
}

impl<T: Arbitrary> Arbitrary for Option<T> {
    fn generate(level: usize, seed: u64) -> Self {
        if level == 0 || mix(seed) % 4 == 0 {
            return None;
        }
        Some(T::generate(level, seed.wrapping_add(1)))
    }

    fn generate_n(n: usize, seed: u64) -> Self {
        Self::generate(n, seed)
    }

    fn shrink(&self) -> Vec<Self> {
        match self {
            Some(_) => vec![None],
            None => Vec::new(),
        }
    }
}

macro_rules! arbitrary_tuple {
    ($(($($name:ident : $index:tt),+)),* $(,)?) => {$(
        impl<$($name: Arbitrary),+> Arbitrary for ($($name,)+) {
            fn generate(level: usize, seed: u64) -> Self {
                if level == 0 {
                    return ($($name::generate(0, seed.wrapping_add($index)),)+);
                }
                ($($name::generate(level.wrapping_add($index), seed.wrapping_add($index)),)+)
            }

            fn generate_n(n: usize, seed: u64) -> Self {
                ($($name::generate_n(n, seed.wrapping_add($index)),)+)
            }
        }
    )*};
}

arbitrary_tuple!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);
