//! Arity inspection.
//!
//! The arity of a function is the number of parameters it accepts. Rust
//! knows it at compile time from the `Fn` signature, so [`Arity`] exposes
//! it as an associated constant instead of reflecting on the function at
//! run time.
//!
//! # Examples
//!
//! ```
//! use jargon::compose::arity_of;
//!
//! let sum = |x: i32, y: i32| x + y;
//! assert_eq!(arity_of(&sum), 2);
//!
//! let answer = || 42;
//! assert_eq!(arity_of(&answer), 0);
//! ```

/// Implemented by every `Fn` of up to six parameters.
///
/// `Arguments` is the tuple of parameter types; it is what lets one closure
/// type pick exactly one implementation.
pub trait Arity<Arguments> {
    /// Number of parameters.
    const ARITY: usize;
}

macro_rules! impl_arity {
    ($count:expr; $($argument:ident),*) => {
        impl<Function, Output, $($argument),*> Arity<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> Output,
        {
            const ARITY: usize = $count;
        }
    };
}

impl_arity!(0;);
impl_arity!(1; A);
impl_arity!(2; A, B);
impl_arity!(3; A, B, C);
impl_arity!(4; A, B, C, D);
impl_arity!(5; A, B, C, D, E);
impl_arity!(6; A, B, C, D, E, G);

/// Returns the number of parameters `function` accepts.
#[inline]
pub const fn arity_of<Arguments, F>(_function: &F) -> usize
where
    F: Arity<Arguments>,
{
    F::ARITY
}
