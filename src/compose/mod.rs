//! Function composition utilities.
//!
//! - [`compose`] / [`compose!`]: build a new function from existing ones,
//!   applied in the order they are listed
//! - [`pipe!`]: push a value through functions left to right
//! - [`Curry`], [`curry2!`], [`curry3!`]: convert multi-argument functions to
//!   curried form
//! - [`Partial`], [`partial!`]: fix some arguments of a function
//! - [`arity_of`]: how many parameters a function takes
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//!
//! # Examples
//!
//! ## Composition
//!
//! ```
//! use jargon::compose::compose;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // compose(f, g)(x) = g(f(x))
//! assert_eq!(compose(add_one, double)(5), 12);
//! ```
//!
//! ## Point-free style
//!
//! A point-free definition never names the data it works on:
//!
//! ```
//! use jargon::compose::Curry;
//!
//! let add = |a: i32, b: i32| a + b;
//! let increment = add.curried()(1);
//! let increment_all = move |numbers: Vec<i32>| -> Vec<i32> {
//!     numbers.into_iter().map(&increment).collect()
//! };
//! assert_eq!(increment_all(vec![4, 3, 2]), vec![5, 4, 3]);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//! - **Double flip**: `flip(flip(f)) == f`

mod arity;
mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use arity::{Arity, arity_of};
pub use compose_macro::compose;
pub use curry_macro::Curry;
pub use partial_macro::Partial;
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::partial;
pub use crate::pipe;
