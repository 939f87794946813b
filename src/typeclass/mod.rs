//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and applying functions within containers
//! - [`Monad`]: sequencing computations with `flat_map`
//! - [`Comonad`]: extracting from and extending over a context
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to let a trait talk about "the same container with a
//! different element type", which is what the type classes above need.
//!
//! ## Foundation Types
//!
//! - [`CoIdentity`]: the identity comonad, a wrapper around exactly one value
//! - [`Sum`]: numbers combined by addition
//!
//! ## Sequence helpers
//!
//! [`map`], [`flat_map`] and [`ap`] work on borrowed slices and always
//! return a new `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use jargon::typeclass::{Applicative, Functor, Monad};
//!
//! assert_eq!(vec![1, 2, 3].fmap(|x| x + 1), vec![2, 3, 4]);
//! assert_eq!(vec![1, 2].flat_map(|x| vec![x, x]), vec![1, 1, 2, 2]);
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1];
//! assert_eq!(functions.apply(vec![1]), vec![2]);
//! ```

mod applicative;
mod co_identity;
mod comonad;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod sequence;
mod sum;

pub use applicative::Applicative;
pub use co_identity::CoIdentity;
pub use comonad::Comonad;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use sequence::{ap, flat_map, map};
pub use sum::Sum;
