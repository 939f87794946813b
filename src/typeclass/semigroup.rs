//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(Sum(1).combine(Sum(2).combine(Sum(3))), Sum(6));
//! ```

use std::ops::Add;

use super::co_identity::CoIdentity;
use super::sum::Sum;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. The operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Semigroup> Semigroup for CoIdentity<A> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}
