//! Control structures for deferred and explicit evaluation order.
//!
//! - [`Lazy`]: a value computed on first use and memoized
//! - [`generate`], [`random_numbers`]: infinite sequences consumed on demand
//! - [`Continuation`]: continuation-passing style as a value
//! - [`Either`]: a value that is one of two types
//!
//! # Examples
//!
//! ## Lazy Evaluation
//!
//! ```rust
//! use jargon::control::Lazy;
//!
//! let lazy = Lazy::new(|| (1..=4).product::<i32>());
//! // nothing computed yet
//! assert_eq!(*lazy.force(), 24);
//! ```
//!
//! ## Continuation-Passing Style
//!
//! ```rust
//! use jargon::control::Continuation;
//!
//! let halve = |n: i32| Continuation::<String, i32>::new(move |next| next(n / 2));
//! let rendered = halve(10).flat_map(halve).run(|n| format!("Halved twice: {n}"));
//! assert_eq!(rendered, "Halved twice: 2");
//! ```

mod continuation;
mod either;
mod lazy;
mod stream;

pub use continuation::Continuation;
pub use either::Either;
pub use lazy::Lazy;
pub use stream::{generate, random_numbers};
