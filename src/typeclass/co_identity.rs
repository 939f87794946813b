//! `CoIdentity` - the identity comonad.
//!
//! `CoIdentity` wraps exactly one value. Because there is no surrounding
//! context besides the value itself, it is the smallest structure on which
//! the comonad operations can be shown:
//!
//! - `extract` unwraps the value
//! - `extend` runs a context-aware function and wraps its result again
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{CoIdentity, Comonad};
//!
//! assert_eq!(CoIdentity::new(1).extract(), 1);
//! assert_eq!(
//!     CoIdentity::new(1).extend(|context| context.extract() + 1),
//!     CoIdentity::new(2)
//! );
//! ```

use super::TypeConstructor;

/// A trivial wrapper holding a single immutable value.
///
/// The `Debug` rendering is `CoIdentity(value)`.
///
/// # Examples
///
/// ```rust
/// use jargon::typeclass::CoIdentity;
///
/// let wrapped = CoIdentity::new("hello");
/// assert_eq!(format!("{wrapped:?}"), "CoIdentity(\"hello\")");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CoIdentity<A>(pub A);

impl<A> CoIdentity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }
}

impl<A> TypeConstructor for CoIdentity<A> {
    type Inner = A;
    type WithType<B> = CoIdentity<B>;
}

impl<A> From<A> for CoIdentity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
