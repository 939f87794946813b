//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))` and to
/// `compose!(f, g, h)(x)`. Each function is called exactly once, so
/// `FnOnce` closures are accepted.
///
/// # Syntax
///
/// - `pipe!(x)` - returns `x` unchanged
/// - `pipe!(x, f)` - returns `f(x)`
/// - `pipe!(x, f, g, ...)` - returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use jargon::pipe;
///
/// fn to_uppercase(s: &str) -> String { s.to_uppercase() }
/// fn add_exclamation(s: String) -> String { format!("{s}!") }
///
/// assert_eq!(pipe!("hello", to_uppercase, add_exclamation), "HELLO!");
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use jargon::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(pipe!(10, f, g), compose!(f, g)(10));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
