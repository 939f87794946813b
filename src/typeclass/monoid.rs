//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a        // left identity
//! a.combine(T::empty()) == a        // right identity
//! ```
//!
//! plus associativity inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(vec![1, 2].combine(Vec::empty()), vec![1, 2]);
//! assert_eq!(String::combine_all(["a", "b", "c"].map(String::from)), "abc");
//! ```

use std::ops::Add;

use super::co_identity::CoIdentity;
use super::semigroup::Semigroup;
use super::sum::Sum;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for [`Semigroup::combine`].
    fn empty() -> Self;

    /// Folds every item with `combine`, starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(items: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Self::empty(), |accumulator, item| accumulator.combine(item))
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: Monoid> Monoid for CoIdentity<A> {
    #[inline]
    fn empty() -> Self {
        Self(A::empty())
    }
}
