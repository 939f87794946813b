//! Monad type class - sequencing computations with dependency.
//!
//! `flat_map` runs a function that itself produces a context and flattens
//! the result by exactly one level. For `Vec` this is "map, then
//! concatenate"; contrast with [`Functor::fmap`](super::Functor::fmap),
//! which would keep the nesting.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::Monad;
//!
//! let animals = vec!["cat,dog", "fish,bird"];
//! let split: Vec<&str> = animals.flat_map(|pair| pair.split(',').collect());
//! assert_eq!(split, vec!["cat", "dog", "fish", "bird"]);
//! ```

use super::applicative::Applicative;
use super::co_identity::CoIdentity;

/// A type class for contexts that can be chained with `flat_map`.
pub trait Monad: Applicative {
    /// Applies `function` and flattens one level of context.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T> Monad for Vec<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<A> Monad for CoIdentity<A> {
    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> CoIdentity<B>
    where
        F: FnMut(A) -> CoIdentity<B>,
    {
        function(self.0)
    }
}
