//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends [`Functor`] with
//!
//! - `pure`, which lifts a plain value into the context, and
//! - `apply`, which applies function(s) living inside a context to value(s)
//!   living inside another context of the same kind.
//!
//! For `Vec` this is the "every function against every element" product:
//! the result holds `f0` applied to all elements, then `f1` applied to all
//! elements, and so on.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::Applicative;
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
//! assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::co_identity::CoIdentity;
use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::Applicative;
///
/// let lifted: Vec<i32> = <Vec<()>>::pure(42);
/// assert_eq!(lifted, vec![42]);
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    ///
    /// For `Vec` this is the cartesian product in row-major order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::Applicative;
    ///
    /// let pairs = vec![1, 2].map2(vec!['a', 'b'], |n, c| format!("{n}{c}"));
    /// assert_eq!(pairs, vec!["1a", "1b", "2a", "2b"]);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Applies the function(s) inside `self` to the value(s) inside `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::Applicative;
    ///
    /// let add_one: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(add_one.apply(Some(1)), Some(2));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        B: Clone,
        Self::Inner: FnMut(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, mut function: F) -> Option<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        B: Clone,
        A: FnMut(B) -> Output,
    {
        match (self, other) {
            (Some(mut function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

impl<T> Applicative for Vec<T> {
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    #[inline]
    fn map2<B, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        T: Clone,
        B: Clone,
        F: FnMut(T, B) -> C,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    #[inline]
    fn apply<B, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        B: Clone,
        T: FnMut(B) -> Output,
    {
        let capacity = self.len().saturating_mul(other.len());
        let mut result = Vec::with_capacity(capacity);
        for mut function in self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}

impl<A> Applicative for CoIdentity<A> {
    #[inline]
    fn pure<B>(value: B) -> CoIdentity<B> {
        CoIdentity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: CoIdentity<B>, mut function: F) -> CoIdentity<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        CoIdentity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: CoIdentity<B>) -> CoIdentity<Output>
    where
        B: Clone,
        A: FnMut(B) -> Output,
    {
        let Self(mut function) = self;
        CoIdentity(function(other.0))
    }
}
