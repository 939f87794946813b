//! Comonad type class - the dual of `Monad`.
//!
//! Where a monad puts values *into* a context (`pure`) and chains functions
//! that produce contexts (`flat_map`), a comonad takes values *out of* a
//! context (`extract`) and chains functions that consume a whole context
//! (`extend`).
//!
//! # Laws
//!
//! ```text
//! w.extend(Comonad::extract)           == w
//! w.extend(f).extract()                == f(w)
//! w.extend(f).extend(g)                == w.extend(|x| g(x.extend(f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{CoIdentity, Comonad};
//!
//! let counter = CoIdentity::new(1);
//! let next = counter.extend(|context| context.extract() + 1);
//! assert_eq!(next.extract(), 2);
//! ```

use super::co_identity::CoIdentity;
use super::functor::Functor;

/// A context a value can always be extracted from.
pub trait Comonad: Functor {
    /// Takes the focused value out of the context.
    fn extract(self) -> Self::Inner;

    /// Runs a context-aware `function` and rewraps its result.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self) -> B;

    /// Wraps the context in itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jargon::typeclass::{CoIdentity, Comonad};
    ///
    /// assert_eq!(CoIdentity(3).duplicate(), CoIdentity(CoIdentity(3)));
    /// ```
    #[inline]
    fn duplicate(self) -> Self::WithType<Self>
    where
        Self: Sized,
    {
        self.extend(|context| context)
    }
}

impl<A> Comonad for CoIdentity<A> {
    #[inline]
    fn extract(self) -> A {
        self.0
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> CoIdentity<B>
    where
        F: FnOnce(Self) -> B,
    {
        CoIdentity(function(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(0)]
    #[case(i32::MAX)]
    fn extract_returns_wrapped_value(#[case] value: i32) {
        assert_eq!(CoIdentity(value).extract(), value);
    }

    #[rstest]
    fn extend_with_extract_is_identity() {
        let wrapped = CoIdentity(String::from("focus"));
        assert_eq!(wrapped.clone().extend(Comonad::extract), wrapped);
    }

    #[rstest]
    fn extend_sees_the_whole_context() {
        let rendered = CoIdentity(7).extend(|context| format!("{context:?}"));
        assert_eq!(rendered, CoIdentity(String::from("CoIdentity(7)")));
    }
}
