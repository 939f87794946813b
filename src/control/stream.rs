//! Infinite lazy sequences.
//!
//! An `Iterator` in Rust is already lazy: nothing is produced until the
//! consumer asks for the next element. That makes an infinite sequence an
//! ordinary value, as long as whoever consumes it bounds it, typically with
//! [`Iterator::take`].
//!
//! The sequences here own their generator state and are consumed as they
//! are read. They cannot be rewound; asking for "the same" sequence again
//! means building a new one.
//!
//! # Examples
//!
//! ```rust
//! use jargon::control::{generate, random_numbers};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let first_ten: Vec<i32> = random_numbers(SmallRng::seed_from_u64(7)).take(10).collect();
//! assert_eq!(first_ten.len(), 10);
//!
//! let mut counter = 0;
//! let naturals: Vec<u32> = generate(move || {
//!     counter += 1;
//!     counter
//! })
//! .take(3)
//! .collect();
//! assert_eq!(naturals, vec![1, 2, 3]);
//! ```

use rand::Rng;

/// An endless sequence whose elements come from calling a generator.
///
/// # Examples
///
/// ```rust
/// use jargon::control::generate;
///
/// let mut doubling = 1_u64;
/// let powers: Vec<u64> = generate(move || {
///     let current = doubling;
///     doubling *= 2;
///     current
/// })
/// .take(5)
/// .collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn generate<T, F>(generator: F) -> impl Iterator<Item = T>
where
    F: FnMut() -> T,
{
    std::iter::repeat_with(generator)
}

/// An endless sequence of uniformly distributed `i32`s drawn from `rng`.
///
/// The sequence takes ownership of `rng`; equal seeds give equal sequences.
pub fn random_numbers<R>(mut rng: R) -> impl Iterator<Item = i32>
where
    R: Rng,
{
    generate(move || rng.r#gen::<i32>())
}
