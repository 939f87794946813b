//! # jargon
//!
//! Functional programming vocabulary, one runnable snippet per term.
//!
//! ## Overview
//!
//! The crate pairs a small functional toolkit with a catalog of
//! demonstrations built on it:
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`, `Comonad`,
//!   `Semigroup`, `Monoid`, and the slice helpers `map`, `flat_map`, `ap`
//! - **Function Composition**: `compose`, `compose!`, `pipe!`, currying,
//!   partial application, arity
//! - **Control Structures**: `Lazy`, `Continuation`, `Either`, infinite
//!   sequences
//! - **Contracts**: runtime checks over tagged values
//! - **Snippets**: closure, currying, functor, monad, comonad, morphisms and
//!   the rest, each printing what it demonstrates
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function composition utilities
//! - `control`: Control structures (Lazy, Continuation)
//! - `snippets`: The snippet catalog
//! - `cli`: The `jargon` binary
//!
//! ## Example
//!
//! ```rust
//! use jargon::prelude::*;
//!
//! let doubled = map(|n: &i32| n * 2, &[1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let to_text = compose(|x: f64| x.round(), |x: f64| x.to_string());
//! assert_eq!(to_text(121.212_121), "121");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use jargon::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    pub use crate::contract::{ContractError, Kind, Value};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

pub mod contract;

#[cfg(feature = "snippets")]
pub mod config;

#[cfg(feature = "snippets")]
pub mod error;

#[cfg(feature = "snippets")]
pub mod snippets;
