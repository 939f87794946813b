//! Functor type class - mapping over container values.
//!
//! A `Functor` lets a function reach the value(s) inside a container while
//! the container keeps its shape: a `Vec` keeps its length and order, an
//! `Option` stays `None` when it was `None`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::Functor;
//!
//! let doubled: Vec<i32> = vec![1, 2, 3].fmap(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let none: Option<i32> = None;
//! assert_eq!(none.fmap(|n| n.to_string()), None);
//! ```

use super::co_identity::CoIdentity;
use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` because multi-element containers such as `Vec`
/// call it once per element.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to references of the values, leaving `self` intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::Functor;
    ///
    /// let words = vec!["cat".to_string(), "bird".to_string()];
    /// let lengths: Vec<usize> = words.fmap_ref(|word| word.len());
    /// assert_eq!(lengths, vec![3, 4]);
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<A> Functor for CoIdentity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> CoIdentity<B>
    where
        F: FnMut(A) -> B,
    {
        CoIdentity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, mut function: F) -> CoIdentity<B>
    where
        F: FnMut(&A) -> B,
    {
        CoIdentity(function(&self.0))
    }
}
