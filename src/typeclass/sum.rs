//! Numeric wrapper selecting addition as the monoid operation.
//!
//! Numbers form several monoids (addition with `0`, multiplication with
//! `1`, ...). Wrapping a number in [`Sum`] picks addition.

/// A wrapper that combines by addition.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }
}
